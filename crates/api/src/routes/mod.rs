pub mod auth;
pub mod contacts;
pub mod health;
pub mod projects;
pub mod tech_stack;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                login (public)
/// /auth/refresh                              refresh (public)
/// /auth/logout                               logout (bearer token)
///
/// /projects                                  public project list
/// /tech-stack                                public tech stack
/// /contact                                   public contact form (POST)
///
/// /admin/projects                            list, create
/// /admin/projects/{id}                       get, update, delete
/// /admin/tech-stack                          list, create
/// /admin/tech-stack/{id}                     update, delete
/// /admin/tech-stack/{id}/toggle-visibility   toggle (POST)
/// /admin/contacts                            inbox list
/// /admin/contacts/{id}/read                  mark read (POST)
/// ```
///
/// Admin routes are gated per-handler by the `AdminUser` extractor rather
/// than a route layer, so each handler states its own auth requirement.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(projects::public_router())
        .merge(tech_stack::public_router())
        .merge(contacts::public_router())
        .nest("/admin/projects", projects::admin_router())
        .nest("/admin/tech-stack", tech_stack::admin_router())
        .nest("/admin/contacts", contacts::admin_router())
}
