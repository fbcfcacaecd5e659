//! Route definitions for tech stack entries.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::tech_stack;
use crate::state::AppState;

/// Public routes.
///
/// ```text
/// GET /tech-stack  -> list_public
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/tech-stack", get(tech_stack::list_public))
}

/// Admin routes mounted at `/admin/tech-stack`.
///
/// ```text
/// GET    /                         -> list_all
/// POST   /                         -> create_entry
/// PUT    /{id}                     -> update_entry
/// DELETE /{id}                     -> delete_entry
/// POST   /{id}/toggle-visibility   -> toggle_visibility
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(tech_stack::list_all).post(tech_stack::create_entry),
        )
        .route(
            "/{id}",
            axum::routing::put(tech_stack::update_entry).delete(tech_stack::delete_entry),
        )
        .route(
            "/{id}/toggle-visibility",
            post(tech_stack::toggle_visibility),
        )
}
