//! Handlers for tech stack entries.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::tech_stack::{CreateTechStackEntry, UpdateTechStackEntry};
use folio_db::repositories::TechStackRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/tech-stack
///
/// Publicly visible entries, grouped by category and ordered by priority.
pub async fn list_public(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = TechStackRepo::list_visible(&state.pool).await?;

    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/admin/tech-stack
///
/// All entries including hidden ones.
pub async fn list_all(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let entries = TechStackRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: entries }))
}

/// POST /api/v1/admin/tech-stack
pub async fn create_entry(
    admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTechStackEntry>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    if input.category.trim().is_empty() {
        return Err(AppError::BadRequest("category must not be empty".into()));
    }

    let entry = TechStackRepo::create(&state.pool, &input).await?;

    tracing::info!(entry_id = entry.id, admin_id = admin.id, "Tech stack entry created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// PUT /api/v1/admin/tech-stack/{id}
///
/// Partial update; only provided fields are applied.
pub async fn update_entry(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTechStackEntry>,
) -> AppResult<impl IntoResponse> {
    let entry = TechStackRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TechStackEntry",
            id,
        }))?;

    tracing::info!(entry_id = id, admin_id = admin.id, "Tech stack entry updated");

    Ok(Json(DataResponse { data: entry }))
}

/// POST /api/v1/admin/tech-stack/{id}/toggle-visibility
pub async fn toggle_visibility(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = TechStackRepo::toggle_visibility(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TechStackEntry",
            id,
        }))?;

    tracing::info!(
        entry_id = id,
        admin_id = admin.id,
        visible = entry.is_visible,
        "Tech stack visibility toggled"
    );

    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/v1/admin/tech-stack/{id}
pub async fn delete_entry(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TechStackRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "TechStackEntry",
            id,
        }));
    }

    tracing::info!(entry_id = id, admin_id = admin.id, "Tech stack entry deleted");

    Ok(StatusCode::NO_CONTENT)
}
