//! Admin session model and DTOs.
//!
//! A session row binds one login's access/refresh token pair (stored as
//! SHA-256 hashes, never raw) to server-side revocation and expiry state.
//! The `session_id` is the opaque handle embedded in both token payloads.

use folio_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session row from the `admin_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct AdminSession {
    pub id: DbId,
    pub admin_user_id: DbId,
    /// Opaque UUID shared by the access and refresh tokens of one login.
    pub session_id: String,
    pub access_token_hash: String,
    pub refresh_token_hash: String,
    /// Server-side expiry, tracked independently of the signed `exp` claim.
    pub access_token_expires_at: Timestamp,
    pub refresh_token_expires_at: Timestamp,
    pub is_revoked: bool,
    pub revoked_at: Option<Timestamp>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub device_info: Option<serde_json::Value>,
    pub last_used_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new session row at login.
#[derive(Debug, Clone)]
pub struct CreateSession {
    pub admin_user_id: DbId,
    pub session_id: String,
    pub access_token_hash: String,
    pub refresh_token_hash: String,
    pub access_token_expires_at: Timestamp,
    pub refresh_token_expires_at: Timestamp,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub device_info: Option<serde_json::Value>,
}

/// DTO for rotating a session's refresh material in place.
///
/// Only the refresh hash and its expiry change; the stored access material
/// is left untouched by rotation.
#[derive(Debug, Clone)]
pub struct RotateRefreshToken {
    pub refresh_token_hash: String,
    pub refresh_token_expires_at: Timestamp,
}
