//! Route definitions for portfolio projects.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Public routes.
///
/// ```text
/// GET /projects  -> list_public
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/projects", get(projects::list_public))
}

/// Admin routes mounted at `/admin/projects`.
///
/// ```text
/// GET    /       -> list_all
/// POST   /       -> create_project
/// GET    /{id}   -> get_project
/// PUT    /{id}   -> update_project
/// DELETE /{id}   -> delete_project
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_all).post(projects::create_project))
        .route(
            "/{id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
}
