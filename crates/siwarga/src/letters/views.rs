use serde::{Deserialize, Serialize};

use super::catalog::{normalize_label, ChecklistCatalog};
use super::domain::{ActionLogEntry, FileAttachment, LetterType, Submission};

/// One required document and whether any uploaded attachment covers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub label: String,
    pub satisfied: bool,
}

/// Full read view of a single submission: the record, its attachments, the
/// complete audit trail, the derived last action, and the computed checklist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionDetail {
    pub submission: Submission,
    pub files: Vec<FileAttachment>,
    pub logs: Vec<ActionLogEntry>,
    pub last_action: Option<ActionLogEntry>,
    pub checklist: Vec<ChecklistItem>,
}

/// Result of a successful lifecycle action: the updated submission and the
/// audit entry written alongside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionOutcome {
    pub submission: Submission,
    pub log: ActionLogEntry,
}

/// Mark each required document satisfied when at least one attachment carries
/// a matching document type, compared after trimming and lowercasing both
/// sides. Duplicate uploads are fine; one match is enough.
pub fn build_checklist(letter_type: LetterType, files: &[FileAttachment]) -> Vec<ChecklistItem> {
    let uploaded: Vec<String> = files
        .iter()
        .map(|file| normalize_label(&file.document_type))
        .collect();

    ChecklistCatalog::required_documents(letter_type)
        .iter()
        .map(|label| ChecklistItem {
            label: (*label).to_string(),
            satisfied: uploaded.contains(&normalize_label(label)),
        })
        .collect()
}
