//! The letter-request lifecycle core.
//!
//! `domain` defines the records and closed enumerations, `catalog` the
//! per-type document checklist, `lifecycle` the status transition table,
//! `access` the role/ownership gate, `repository` the storage contract,
//! `service` the operation facade, `views` the computed read models, and
//! `router` the HTTP adapter.

pub mod access;
pub mod catalog;
pub mod domain;
pub mod lifecycle;
pub mod repository;
pub mod router;
pub mod service;
pub mod views;

pub use access::AccessGate;
pub use catalog::{normalize_label, ChecklistCatalog};
pub use domain::{
    ActionLogEntry, AttachmentId, FileAttachment, LetterType, LogEntryId, NewAttachment,
    NewLogEntry, NewSubmission, Principal, Role, Submission, SubmissionAction, SubmissionId,
    SubmissionStatus, UserId,
};
pub use lifecycle::transition;
pub use repository::{LetterStore, RepositoryError, SubmissionFilter};
pub use router::{letter_router, USER_ID_HEADER, USER_ROLE_HEADER};
pub use service::{AttachmentRequest, LetterService, LetterServiceError};
pub use views::{build_checklist, ActionOutcome, ChecklistItem, SubmissionDetail};
