use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use super::access::AccessGate;
use super::domain::{
    AttachmentId, FileAttachment, LetterType, NewAttachment, NewLogEntry, NewSubmission,
    Principal, Submission, SubmissionAction, SubmissionId, SubmissionStatus,
};
use super::lifecycle::transition;
use super::repository::{LetterStore, RepositoryError, SubmissionFilter};
use super::views::{build_checklist, ActionOutcome, SubmissionDetail};

/// Attachment metadata supplied by the upload gateway once the bytes have
/// landed in blob storage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AttachmentRequest {
    pub document_type: String,
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub storage_handle: String,
}

/// Facade over the lifecycle core: every externally reachable operation on
/// submissions goes through here, and every one consults the access gate
/// before touching data.
pub struct LetterService<S> {
    store: Arc<S>,
}

impl<S> LetterService<S>
where
    S: LetterStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a submission on behalf of a resident. Staff accounts do not
    /// file requests for themselves.
    pub fn create(
        &self,
        principal: &Principal,
        letter_type: &str,
        payload: serde_json::Value,
    ) -> Result<Submission, LetterServiceError> {
        if principal.is_admin() {
            return Err(LetterServiceError::Forbidden);
        }

        let letter_type = LetterType::from_label(letter_type)
            .ok_or_else(|| LetterServiceError::InvalidType(letter_type.trim().to_string()))?;

        let submission = self.store.insert_submission(NewSubmission {
            owner_id: principal.id,
            letter_type,
            payload,
        })?;

        info!(
            submission = %submission.id,
            owner = %submission.owner_id,
            %letter_type,
            "submission created"
        );
        Ok(submission)
    }

    /// The caller's own submissions, newest first.
    pub fn list_own(
        &self,
        principal: &Principal,
        filter: &SubmissionFilter,
    ) -> Result<Vec<Submission>, LetterServiceError> {
        if principal.is_admin() {
            return Err(LetterServiceError::Forbidden);
        }
        Ok(self.store.list_by_owner(principal.id, filter)?)
    }

    /// Every submission, newest first. Staff only.
    pub fn list_all(
        &self,
        principal: &Principal,
        filter: &SubmissionFilter,
    ) -> Result<Vec<Submission>, LetterServiceError> {
        if !principal.is_admin() {
            return Err(LetterServiceError::Forbidden);
        }
        Ok(self.store.list_all(filter)?)
    }

    /// Single-submission read view with files, audit trail, derived last
    /// action, and checklist satisfaction. Side-effect free.
    pub fn detail(
        &self,
        id: SubmissionId,
        principal: &Principal,
    ) -> Result<SubmissionDetail, LetterServiceError> {
        let submission = self
            .store
            .fetch_submission(id)?
            .ok_or(LetterServiceError::NotFound)?;

        if !AccessGate::can_read(principal, &submission) {
            return Err(LetterServiceError::Forbidden);
        }

        let files = self.store.attachments_for(id)?;
        let logs = self.store.entries_for(id)?;
        let last_action = self.store.last_entry_for(id)?;
        let checklist = build_checklist(submission.letter_type, &files);

        Ok(SubmissionDetail {
            submission,
            files,
            logs,
            last_action,
            checklist,
        })
    }

    /// Record metadata for an uploaded document. The declared document type is
    /// stored verbatim; the declared mime type is sanitized to a well-formed
    /// value with `application/octet-stream` as the fallback.
    pub fn attach_file(
        &self,
        id: SubmissionId,
        principal: &Principal,
        request: AttachmentRequest,
    ) -> Result<FileAttachment, LetterServiceError> {
        let submission = self
            .store
            .fetch_submission(id)?
            .ok_or(LetterServiceError::NotFound)?;

        if !AccessGate::can_attach(principal, &submission) {
            return Err(LetterServiceError::Forbidden);
        }

        let attachment = self.store.insert_attachment(NewAttachment {
            submission_id: id,
            document_type: request.document_type,
            original_name: request.original_name,
            mime_type: sanitize_mime(&request.mime_type),
            size_bytes: request.size_bytes,
            storage_handle: request.storage_handle,
        })?;

        info!(
            submission = %id,
            attachment = %attachment.id,
            document_type = %attachment.document_type,
            "attachment recorded"
        );
        Ok(attachment)
    }

    /// Metadata for a single attachment, gated like its owning submission.
    pub fn attachment_detail(
        &self,
        id: AttachmentId,
        principal: &Principal,
    ) -> Result<FileAttachment, LetterServiceError> {
        let (attachment, submission) = self
            .store
            .fetch_attachment(id)?
            .ok_or(LetterServiceError::NotFound)?;

        if !AccessGate::can_read(principal, &submission) {
            return Err(LetterServiceError::Forbidden);
        }
        Ok(attachment)
    }

    /// Validate and apply a lifecycle action.
    ///
    /// On the failure paths neither the status nor the log is touched. The
    /// store's compare-and-set serializes concurrent actions on the same
    /// submission; the loser surfaces as `InvalidTransition` against the
    /// status the winner left behind.
    pub fn apply_action(
        &self,
        id: SubmissionId,
        principal: &Principal,
        action: SubmissionAction,
        note: Option<String>,
    ) -> Result<ActionOutcome, LetterServiceError> {
        let submission = self
            .store
            .fetch_submission(id)?
            .ok_or(LetterServiceError::NotFound)?;

        if !AccessGate::can_act(principal, &submission) {
            return Err(LetterServiceError::Forbidden);
        }

        let next = transition(submission.status, action).ok_or(
            LetterServiceError::InvalidTransition {
                action,
                status: submission.status,
            },
        )?;

        let entry = NewLogEntry {
            submission_id: id,
            action,
            note,
            actor_id: principal.id,
        };

        match self
            .store
            .record_transition(id, submission.status, next, entry)
        {
            Ok((submission, log)) => {
                info!(
                    submission = %submission.id,
                    %action,
                    status = %submission.status,
                    actor = %log.actor_id,
                    "lifecycle action applied"
                );
                Ok(ActionOutcome { submission, log })
            }
            Err(RepositoryError::StaleStatus) => {
                let status = self
                    .store
                    .fetch_submission(id)?
                    .ok_or(LetterServiceError::NotFound)?
                    .status;
                Err(LetterServiceError::InvalidTransition { action, status })
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn sanitize_mime(raw: &str) -> String {
    raw.trim()
        .parse::<mime::Mime>()
        .map(|parsed| parsed.to_string())
        .unwrap_or_else(|_| mime::APPLICATION_OCTET_STREAM.to_string())
}

/// Client-fault error taxonomy of the lifecycle core. None of these are
/// retriable as-is: the caller must change its request.
#[derive(Debug, thiserror::Error)]
pub enum LetterServiceError {
    #[error("submission not found")]
    NotFound,
    #[error("operation not permitted for this principal")]
    Forbidden,
    #[error("unknown letter type: {0}")]
    InvalidType(String),
    #[error("action {action} is not legal while status is {status}")]
    InvalidTransition {
        action: SubmissionAction,
        status: SubmissionStatus,
    },
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for LetterServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => LetterServiceError::NotFound,
            other => LetterServiceError::Repository(other),
        }
    }
}
