use super::domain::{
    ActionLogEntry, AttachmentId, FileAttachment, LetterType, NewAttachment, NewLogEntry,
    NewSubmission, Submission, SubmissionId, SubmissionStatus, UserId,
};

/// Optional narrowing applied to submission listings. Both the resident and
/// the staff views accept the same filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionFilter {
    pub status: Option<SubmissionStatus>,
    pub letter_type: Option<LetterType>,
}

impl SubmissionFilter {
    pub fn matches(&self, submission: &Submission) -> bool {
        self.status
            .map_or(true, |status| submission.status == status)
            && self
                .letter_type
                .map_or(true, |letter_type| submission.letter_type == letter_type)
    }
}

/// Storage contract backing the lifecycle core: submission records, their
/// owned attachments, and the append-only action log.
///
/// Listing order is part of the contract, not an accident of the backend:
/// submissions list newest first, attachments in upload order, log entries
/// chronologically with ties broken by id ascending. A conforming store must
/// preserve these orders across restarts.
pub trait LetterStore: Send + Sync {
    /// Persist a new submission with status `SUBMITTED` and fresh timestamps.
    fn insert_submission(&self, new: NewSubmission) -> Result<Submission, RepositoryError>;

    fn fetch_submission(&self, id: SubmissionId) -> Result<Option<Submission>, RepositoryError>;

    /// Submissions created by `owner`, newest first.
    fn list_by_owner(
        &self,
        owner: UserId,
        filter: &SubmissionFilter,
    ) -> Result<Vec<Submission>, RepositoryError>;

    /// Every submission, newest first. Staff view.
    fn list_all(&self, filter: &SubmissionFilter) -> Result<Vec<Submission>, RepositoryError>;

    /// Record attachment metadata. Fails `NotFound` when the submission is
    /// absent. The document type is stored verbatim: the checklist catalog is
    /// advisory and uploads are deliberately not validated against it.
    fn insert_attachment(&self, new: NewAttachment) -> Result<FileAttachment, RepositoryError>;

    /// Attachments in upload order.
    fn attachments_for(&self, id: SubmissionId) -> Result<Vec<FileAttachment>, RepositoryError>;

    /// An attachment joined with its owning submission, for gate checks.
    fn fetch_attachment(
        &self,
        id: AttachmentId,
    ) -> Result<Option<(FileAttachment, Submission)>, RepositoryError>;

    /// Audit-trail entries in chronological order.
    fn entries_for(&self, id: SubmissionId) -> Result<Vec<ActionLogEntry>, RepositoryError>;

    /// Most recent audit-trail entry, derived from the log itself.
    fn last_entry_for(
        &self,
        id: SubmissionId,
    ) -> Result<Option<ActionLogEntry>, RepositoryError>;

    /// Atomic status transition: verify the submission still carries
    /// `expected`, then update status plus `updated_at` and append the log
    /// entry as one unit. Fails `StaleStatus` when a concurrent transition got
    /// there first; neither write happens on any failure path.
    fn record_transition(
        &self,
        id: SubmissionId,
        expected: SubmissionStatus,
        next: SubmissionStatus,
        entry: NewLogEntry,
    ) -> Result<(Submission, ActionLogEntry), RepositoryError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("submission status changed concurrently")]
    StaleStatus,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
