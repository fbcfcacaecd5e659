//! Handlers for the `/auth` resource (login, refresh, logout).
//!
//! These are thin HTTP shims over the auth engine: they parse and validate
//! the wire format, collect client provenance, and let the engine make
//! every authentication decision.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use folio_core::error::CoreError;
use folio_db::models::admin_user::AdminSummary;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::engine::ClientContext;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::strip_bearer;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful login response: raw token pair plus a public-safe summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub admin: AdminSummary,
}

/// Successful refresh response: a fully rotated token pair.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let ctx = ClientContext {
        ip_address: client_ip(&headers),
        user_agent: header_string(&headers, "user-agent"),
        device_info: None,
    };

    let tokens = state.auth.login(&input.email, &input.password, ctx).await?;

    Ok(Json(LoginResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        admin: tokens.admin,
    }))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for a new, rotated token pair.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<RefreshResponse>> {
    let tokens = state.auth.refresh(&input.refresh_token).await?;

    Ok(Json(RefreshResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
    }))
}

/// POST /api/v1/auth/logout
///
/// Revoke the session named by the presented access token. Returns 204 No
/// Content; logging out an already-dead session is a silent success.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<StatusCode> {
    let header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Authorization header required".into(),
            ))
        })?;

    // Tolerate clients that double-wrap the header (`Bearer Bearer <t>`).
    let access_token = strip_bearer(header);
    if access_token.is_empty() {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid authorization token".into(),
        )));
    }

    state.auth.logout(access_token).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Best-effort client IP: first `x-forwarded-for` hop, else `x-real-ip`.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    if let Some(forwarded) = header_string(headers, "x-forwarded-for") {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return Some(first.to_string());
            }
        }
    }
    header_string(headers, "x-real-ip")
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}
