use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Path, Query, State},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{
    AttachmentId, FileAttachment, LetterType, Principal, Role, Submission, SubmissionAction,
    SubmissionId, SubmissionStatus, UserId,
};
use super::repository::{LetterStore, SubmissionFilter};
use super::service::{AttachmentRequest, LetterService, LetterServiceError};
use super::views::{ActionOutcome, SubmissionDetail};

/// Identity headers injected by the fronting gateway. The gateway owns
/// authentication; this adapter only reads the verdict.
pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Router builder exposing the lifecycle core over HTTP.
pub fn letter_router<S>(service: Arc<LetterService<S>>) -> Router
where
    S: LetterStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/letters",
            post(create_handler::<S>).get(list_own_handler::<S>),
        )
        .route("/api/v1/letters/:submission_id", get(detail_handler::<S>))
        .route(
            "/api/v1/letters/:submission_id/files",
            post(attach_handler::<S>),
        )
        .route(
            "/api/v1/letters/:submission_id/actions",
            post(action_handler::<S>),
        )
        .route("/api/v1/admin/letters", get(list_all_handler::<S>))
        .route("/api/v1/files/:attachment_id", get(attachment_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
struct CreateSubmissionRequest {
    letter_type: String,
    payload: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ActionRequest {
    action: SubmissionAction,
    note: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    status: Option<SubmissionStatus>,
    letter_type: Option<String>,
}

impl ListQuery {
    /// Turn raw query parameters into a typed filter. Unknown letter-type
    /// labels are rejected here, consistent with the creation boundary.
    fn into_filter(self) -> Result<SubmissionFilter, LetterServiceError> {
        let letter_type = match self.letter_type {
            Some(raw) => Some(
                LetterType::from_label(&raw)
                    .ok_or_else(|| LetterServiceError::InvalidType(raw.trim().to_string()))?,
            ),
            None => None,
        };

        Ok(SubmissionFilter {
            status: self.status,
            letter_type,
        })
    }
}

async fn create_handler<S>(
    State(service): State<Arc<LetterService<S>>>,
    principal: Principal,
    Json(request): Json<CreateSubmissionRequest>,
) -> Result<(StatusCode, Json<Submission>), LetterServiceError>
where
    S: LetterStore + 'static,
{
    let submission = service.create(&principal, &request.letter_type, request.payload)?;
    Ok((StatusCode::CREATED, Json(submission)))
}

async fn list_own_handler<S>(
    State(service): State<Arc<LetterService<S>>>,
    principal: Principal,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Submission>>, LetterServiceError>
where
    S: LetterStore + 'static,
{
    let filter = query.into_filter()?;
    Ok(Json(service.list_own(&principal, &filter)?))
}

async fn list_all_handler<S>(
    State(service): State<Arc<LetterService<S>>>,
    principal: Principal,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Submission>>, LetterServiceError>
where
    S: LetterStore + 'static,
{
    let filter = query.into_filter()?;
    Ok(Json(service.list_all(&principal, &filter)?))
}

async fn detail_handler<S>(
    State(service): State<Arc<LetterService<S>>>,
    principal: Principal,
    Path(submission_id): Path<u64>,
) -> Result<Json<SubmissionDetail>, LetterServiceError>
where
    S: LetterStore + 'static,
{
    let detail = service.detail(SubmissionId(submission_id), &principal)?;
    Ok(Json(detail))
}

async fn attach_handler<S>(
    State(service): State<Arc<LetterService<S>>>,
    principal: Principal,
    Path(submission_id): Path<u64>,
    Json(request): Json<AttachmentRequest>,
) -> Result<(StatusCode, Json<FileAttachment>), LetterServiceError>
where
    S: LetterStore + 'static,
{
    let attachment = service.attach_file(SubmissionId(submission_id), &principal, request)?;
    Ok((StatusCode::CREATED, Json(attachment)))
}

async fn attachment_handler<S>(
    State(service): State<Arc<LetterService<S>>>,
    principal: Principal,
    Path(attachment_id): Path<u64>,
) -> Result<Json<FileAttachment>, LetterServiceError>
where
    S: LetterStore + 'static,
{
    let attachment = service.attachment_detail(AttachmentId(attachment_id), &principal)?;
    Ok(Json(attachment))
}

async fn action_handler<S>(
    State(service): State<Arc<LetterService<S>>>,
    principal: Principal,
    Path(submission_id): Path<u64>,
    Json(request): Json<ActionRequest>,
) -> Result<Json<ActionOutcome>, LetterServiceError>
where
    S: LetterStore + 'static,
{
    let outcome = service.apply_action(
        SubmissionId(submission_id),
        &principal,
        request.action,
        request.note,
    )?;
    Ok(Json(outcome))
}

/// Rejection for requests missing usable identity headers.
#[derive(Debug)]
pub struct IdentityRejection;

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": "missing or invalid identity headers" }));
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .ok_or(IdentityRejection)?;

        let role = parts
            .headers
            .get(USER_ROLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(Role::from_label)
            .ok_or(IdentityRejection)?;

        Ok(Principal {
            id: UserId(id),
            role,
        })
    }
}

impl IntoResponse for LetterServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            LetterServiceError::NotFound => StatusCode::NOT_FOUND,
            LetterServiceError::Forbidden => StatusCode::FORBIDDEN,
            LetterServiceError::InvalidType(_) => StatusCode::UNPROCESSABLE_ENTITY,
            LetterServiceError::InvalidTransition { .. } => StatusCode::CONFLICT,
            LetterServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
