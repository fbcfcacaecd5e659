//! Session-validated authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use folio_core::error::CoreError;
use folio_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated admin extracted from a Bearer access token in the
/// `Authorization` header.
///
/// Unlike a pure JWT check, extraction runs the full engine validation:
/// the token's session must exist, be unrevoked, and be within its stored
/// expiry. Use this as an extractor parameter in any handler that requires
/// admin authentication:
///
/// ```ignore
/// async fn my_handler(admin: AdminUser) -> AppResult<Json<()>> {
///     tracing::info!(admin_id = admin.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// The account's internal database id (from the `sub` claim).
    pub id: DbId,
    pub email: String,
    /// The session this request is authorized under.
    pub session_id: String,
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Authorization header required".into(),
                ))
            })?;

        let token = strip_bearer(auth_header);
        if token.is_empty() {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid authorization token".into(),
            )));
        }

        let payload = state.auth.validate_access_token(token).await?;

        Ok(AdminUser {
            id: payload.sub,
            email: payload.email,
            session_id: payload.session_id,
        })
    }
}

/// Strip `Bearer ` prefixes from an `Authorization` header value.
///
/// Some clients double-wrap the header (`Bearer Bearer <token>`); all
/// leading prefixes are removed, case-insensitively.
pub fn strip_bearer(header: &str) -> &str {
    let mut rest = header.trim();
    while rest.len() >= 7 && rest[..7].eq_ignore_ascii_case("bearer ") {
        rest = rest[7..].trim_start();
    }
    rest
}
