//! Route definitions for the contact form and admin inbox.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::contacts;
use crate::state::AppState;

/// Public routes.
///
/// ```text
/// POST /contact  -> submit
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/contact", post(contacts::submit))
}

/// Admin routes mounted at `/admin/contacts`.
///
/// ```text
/// GET  /            -> list
/// POST /{id}/read   -> mark_read
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(contacts::list))
        .route("/{id}/read", post(contacts::mark_read))
}
