//! Handlers for portfolio projects.
//!
//! Public read access plus admin CRUD. All admin endpoints are gated by the
//! [`AdminUser`] extractor.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::project::{CreateProject, UpdateProject};
use folio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/v1/projects
///
/// Publicly visible projects: active only, featured first.
pub async fn list_public(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list_public(&state.pool).await?;

    Ok(Json(DataResponse { data: projects }))
}

// ---------------------------------------------------------------------------
// Admin CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/projects
///
/// All projects regardless of status, newest first.
pub async fn list_all(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/admin/projects/{id}
pub async fn get_project(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    Ok(Json(DataResponse { data: project }))
}

/// POST /api/v1/admin/projects
///
/// Create a project. The slug must be unique; a taken slug is a 409.
pub async fn create_project(
    admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".into()));
    }
    if input.slug.trim().is_empty() {
        return Err(AppError::BadRequest("slug must not be empty".into()));
    }

    // Explicit pre-check for a friendlier message; the unique constraint
    // remains the backstop under concurrent creates.
    if ProjectRepo::find_by_slug(&state.pool, &input.slug)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Project slug already exists: {}",
            input.slug
        ))));
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;

    tracing::info!(project_id = project.id, admin_id = admin.id, "Project created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// PUT /api/v1/admin/projects/{id}
///
/// Partial update; only provided fields are applied.
pub async fn update_project(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    tracing::info!(project_id = id, admin_id = admin.id, "Project updated");

    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete_project(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    tracing::info!(project_id = id, admin_id = admin.id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}
