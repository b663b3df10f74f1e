use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for submissions. Assigned by the store, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub u64);

/// Identifier wrapper for the resident or staff account behind a principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub u64);

/// Identifier wrapper for uploaded file attachments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AttachmentId(pub u64);

/// Identifier wrapper for audit-trail entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LogEntryId(pub u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role attached to an authenticated principal by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Citizen,
    Admin,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Role::Citizen => "CITIZEN",
            Role::Admin => "ADMIN",
        }
    }

    /// Parse the role label supplied by the identity gateway.
    pub fn from_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "CITIZEN" => Some(Role::Citizen),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Authenticated actor performing an operation. The core trusts the identity
/// provider that produced it and never inspects credentials itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: UserId,
    pub role: Role,
}

impl Principal {
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// Closed enumeration of the administrative-letter types residents may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterType {
    #[serde(rename = "Surat Pengantar KTP")]
    PengantarKtp,
    #[serde(rename = "Surat Pengantar KK")]
    PengantarKk,
    #[serde(rename = "Surat Pengantar Domisili")]
    PengantarDomisili,
    #[serde(rename = "Surat Pengantar SKCK")]
    PengantarSkck,
    #[serde(rename = "Surat Pengantar Nikah")]
    PengantarNikah,
    #[serde(rename = "Surat Pengantar Usaha (UMKM)")]
    PengantarUsaha,
    #[serde(rename = "Surat Pengantar Tidak Mampu")]
    PengantarTidakMampu,
}

impl LetterType {
    pub const ALL: [LetterType; 7] = [
        LetterType::PengantarKtp,
        LetterType::PengantarKk,
        LetterType::PengantarDomisili,
        LetterType::PengantarSkck,
        LetterType::PengantarNikah,
        LetterType::PengantarUsaha,
        LetterType::PengantarTidakMampu,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            LetterType::PengantarKtp => "Surat Pengantar KTP",
            LetterType::PengantarKk => "Surat Pengantar KK",
            LetterType::PengantarDomisili => "Surat Pengantar Domisili",
            LetterType::PengantarSkck => "Surat Pengantar SKCK",
            LetterType::PengantarNikah => "Surat Pengantar Nikah",
            LetterType::PengantarUsaha => "Surat Pengantar Usaha (UMKM)",
            LetterType::PengantarTidakMampu => "Surat Pengantar Tidak Mampu",
        }
    }

    /// Resolve a caller-supplied label. Anything outside the enumeration is
    /// rejected at this boundary instead of deeper in the engine.
    pub fn from_label(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|letter_type| letter_type.label().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for LetterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle status of a submission. Mutated only through the lifecycle engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    Submitted,
    InReview,
    RevisionRequired,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 5] = [
        SubmissionStatus::Submitted,
        SubmissionStatus::InReview,
        SubmissionStatus::RevisionRequired,
        SubmissionStatus::Approved,
        SubmissionStatus::Rejected,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Submitted => "SUBMITTED",
            SubmissionStatus::InReview => "IN_REVIEW",
            SubmissionStatus::RevisionRequired => "REVISION_REQUIRED",
            SubmissionStatus::Approved => "APPROVED",
            SubmissionStatus::Rejected => "REJECTED",
        }
    }

    /// Approved and rejected submissions accept no further actions.
    pub const fn is_terminal(self) -> bool {
        matches!(self, SubmissionStatus::Approved | SubmissionStatus::Rejected)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Admin-triggered lifecycle action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionAction {
    SetInReview,
    Approve,
    Reject,
    RequestRevision,
}

impl SubmissionAction {
    pub const ALL: [SubmissionAction; 4] = [
        SubmissionAction::SetInReview,
        SubmissionAction::Approve,
        SubmissionAction::Reject,
        SubmissionAction::RequestRevision,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SubmissionAction::SetInReview => "SET_IN_REVIEW",
            SubmissionAction::Approve => "APPROVE",
            SubmissionAction::Reject => "REJECT",
            SubmissionAction::RequestRevision => "REQUEST_REVISION",
        }
    }
}

impl fmt::Display for SubmissionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A resident's request for an administrative letter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub owner_id: UserId,
    pub letter_type: LetterType,
    pub payload: serde_json::Value,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Metadata for an uploaded document. The bytes live in blob storage behind
/// `storage_handle`; the core owns only this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    pub id: AttachmentId,
    pub submission_id: SubmissionId,
    pub document_type: String,
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub storage_handle: String,
    pub created_at: DateTime<Utc>,
}

/// Append-only audit record of one lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLogEntry {
    pub id: LogEntryId,
    pub submission_id: SubmissionId,
    pub action: SubmissionAction,
    pub note: Option<String>,
    pub actor_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new submission. The store assigns id, status, and
/// timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubmission {
    pub owner_id: UserId,
    pub letter_type: LetterType,
    pub payload: serde_json::Value,
}

/// Insert payload for a new attachment record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttachment {
    pub submission_id: SubmissionId,
    pub document_type: String,
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub storage_handle: String,
}

/// Insert payload for a new audit-trail entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLogEntry {
    pub submission_id: SubmissionId,
    pub action: SubmissionAction,
    pub note: Option<String>,
    pub actor_id: UserId,
}
