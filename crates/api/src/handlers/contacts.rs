//! Handlers for the public contact form and its admin inbox.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::contact::CreateContact;
use folio_db::repositories::ContactRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Largest page the admin inbox will return in one request.
const MAX_PAGE_SIZE: i64 = 200;

/// Request body for `POST /contact`.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 120, message = "name must be 1-120 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 200, message = "subject must be 1-200 characters"))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000, message = "message must be 1-5000 characters"))]
    pub message: String,
}

/// Paging parameters for the admin inbox.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

/// POST /api/v1/contact
///
/// Public contact form submission.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<ContactRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let contact = ContactRepo::create(
        &state.pool,
        &CreateContact {
            name: input.name,
            email: input.email,
            subject: input.subject,
            message: input.message,
        },
    )
    .await?;

    tracing::info!(contact_id = contact.id, "Contact submission received");

    Ok((StatusCode::CREATED, Json(DataResponse { data: contact })))
}

/// GET /api/v1/admin/contacts
///
/// Paginated inbox, newest first.
pub async fn list(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.clamp(1, MAX_PAGE_SIZE);
    let offset = params.offset.max(0);

    let contacts = ContactRepo::list(&state.pool, limit, offset).await?;

    Ok(Json(DataResponse { data: contacts }))
}

/// POST /api/v1/admin/contacts/{id}/read
///
/// Mark a submission as read.
pub async fn mark_read(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let contact = ContactRepo::mark_read(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;

    tracing::info!(contact_id = id, admin_id = admin.id, "Contact marked read");

    Ok(Json(DataResponse { data: contact }))
}
