use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use siwarga::letters::{
    ActionLogEntry, AttachmentId, FileAttachment, LetterStore, LogEntryId, NewAttachment,
    NewLogEntry, NewSubmission, RepositoryError, Submission, SubmissionFilter, SubmissionId,
    SubmissionStatus, UserId,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
struct StoreInner {
    submissions: BTreeMap<u64, Submission>,
    attachments: Vec<FileAttachment>,
    entries: Vec<ActionLogEntry>,
    next_submission_id: u64,
    next_attachment_id: u64,
    next_entry_id: u64,
}

/// Process-local store backing the service. A single mutex guards all three
/// collections, so a recorded transition and its audit entry land together.
/// Submission ids are assigned in insertion order, which the BTreeMap turns
/// into newest-first listings when iterated in reverse.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLetterStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl InMemoryLetterStore {
    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>, RepositoryError> {
        self.inner
            .lock()
            .map_err(|_| RepositoryError::Unavailable("store mutex poisoned".to_string()))
    }
}

impl LetterStore for InMemoryLetterStore {
    fn insert_submission(&self, new: NewSubmission) -> Result<Submission, RepositoryError> {
        let mut inner = self.lock()?;
        inner.next_submission_id += 1;
        let now = Utc::now();
        let submission = Submission {
            id: SubmissionId(inner.next_submission_id),
            owner_id: new.owner_id,
            letter_type: new.letter_type,
            payload: new.payload,
            status: SubmissionStatus::Submitted,
            created_at: now,
            updated_at: now,
        };
        inner
            .submissions
            .insert(submission.id.0, submission.clone());
        Ok(submission)
    }

    fn fetch_submission(&self, id: SubmissionId) -> Result<Option<Submission>, RepositoryError> {
        let inner = self.lock()?;
        Ok(inner.submissions.get(&id.0).cloned())
    }

    fn list_by_owner(
        &self,
        owner: UserId,
        filter: &SubmissionFilter,
    ) -> Result<Vec<Submission>, RepositoryError> {
        let inner = self.lock()?;
        Ok(inner
            .submissions
            .values()
            .rev()
            .filter(|submission| submission.owner_id == owner && filter.matches(submission))
            .cloned()
            .collect())
    }

    fn list_all(&self, filter: &SubmissionFilter) -> Result<Vec<Submission>, RepositoryError> {
        let inner = self.lock()?;
        Ok(inner
            .submissions
            .values()
            .rev()
            .filter(|submission| filter.matches(submission))
            .cloned()
            .collect())
    }

    fn insert_attachment(&self, new: NewAttachment) -> Result<FileAttachment, RepositoryError> {
        let mut inner = self.lock()?;
        if !inner.submissions.contains_key(&new.submission_id.0) {
            return Err(RepositoryError::NotFound);
        }
        inner.next_attachment_id += 1;
        let attachment = FileAttachment {
            id: AttachmentId(inner.next_attachment_id),
            submission_id: new.submission_id,
            document_type: new.document_type,
            original_name: new.original_name,
            mime_type: new.mime_type,
            size_bytes: new.size_bytes,
            storage_handle: new.storage_handle,
            created_at: Utc::now(),
        };
        inner.attachments.push(attachment.clone());
        Ok(attachment)
    }

    fn attachments_for(&self, id: SubmissionId) -> Result<Vec<FileAttachment>, RepositoryError> {
        let inner = self.lock()?;
        Ok(inner
            .attachments
            .iter()
            .filter(|attachment| attachment.submission_id == id)
            .cloned()
            .collect())
    }

    fn fetch_attachment(
        &self,
        id: AttachmentId,
    ) -> Result<Option<(FileAttachment, Submission)>, RepositoryError> {
        let inner = self.lock()?;
        let Some(attachment) = inner
            .attachments
            .iter()
            .find(|attachment| attachment.id == id)
            .cloned()
        else {
            return Ok(None);
        };
        let submission = inner.submissions.get(&attachment.submission_id.0).cloned();
        Ok(submission.map(|submission| (attachment, submission)))
    }

    fn entries_for(&self, id: SubmissionId) -> Result<Vec<ActionLogEntry>, RepositoryError> {
        let inner = self.lock()?;
        Ok(inner
            .entries
            .iter()
            .filter(|entry| entry.submission_id == id)
            .cloned()
            .collect())
    }

    fn last_entry_for(
        &self,
        id: SubmissionId,
    ) -> Result<Option<ActionLogEntry>, RepositoryError> {
        let inner = self.lock()?;
        Ok(inner
            .entries
            .iter()
            .filter(|entry| entry.submission_id == id)
            .max_by_key(|entry| (entry.created_at, entry.id))
            .cloned())
    }

    fn record_transition(
        &self,
        id: SubmissionId,
        expected: SubmissionStatus,
        next: SubmissionStatus,
        entry: NewLogEntry,
    ) -> Result<(Submission, ActionLogEntry), RepositoryError> {
        let mut inner = self.lock()?;
        inner.next_entry_id += 1;
        let entry_id = inner.next_entry_id;
        let Some(submission) = inner.submissions.get_mut(&id.0) else {
            return Err(RepositoryError::NotFound);
        };
        if submission.status != expected {
            return Err(RepositoryError::StaleStatus);
        }
        let now = Utc::now();
        submission.status = next;
        submission.updated_at = now;
        let submission = submission.clone();
        let log = ActionLogEntry {
            id: LogEntryId(entry_id),
            submission_id: id,
            action: entry.action,
            note: entry.note,
            actor_id: entry.actor_id,
            created_at: now,
        };
        inner.entries.push(log.clone());
        Ok((submission, log))
    }
}
