//! Store contracts the auth engine depends on, plus Postgres adapters.
//!
//! The engine never touches a connection pool directly: it talks to
//! [`AdminAccountStore`] and [`SessionStore`]. Production wires in the
//! Postgres adapters below (thin delegations to the `folio_db`
//! repositories); engine unit tests substitute in-memory maps.
//!
//! All methods surface `sqlx::Error` -- the workspace-wide store error
//! type -- regardless of backend; non-SQL implementations simply never
//! construct one.

use async_trait::async_trait;
use folio_core::types::DbId;
use folio_db::models::admin_user::AdminUser;
use folio_db::models::session::{AdminSession, CreateSession, RotateRefreshToken};
use folio_db::repositories::{AdminUserRepo, SessionRepo};
use folio_db::DbPool;

/// Read/update access to admin account records.
#[async_trait]
pub trait AdminAccountStore: Send + Sync {
    /// Look up an account by email (case-sensitive exact match).
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, sqlx::Error>;

    /// Look up an account by id.
    async fn find_by_id(&self, id: DbId) -> Result<Option<AdminUser>, sqlx::Error>;

    /// Record a successful login (`last_login_at = now`).
    async fn record_login(&self, id: DbId) -> Result<(), sqlx::Error>;
}

/// Persistence contract for admin sessions.
///
/// Lookups by token hash only return live rows (not revoked, stored expiry
/// in the future); lookup by session id returns the row regardless of state
/// so callers can distinguish the failure modes.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, input: CreateSession) -> Result<AdminSession, sqlx::Error>;

    async fn find_by_refresh_token_hash(
        &self,
        hash: &str,
    ) -> Result<Option<AdminSession>, sqlx::Error>;

    async fn find_by_access_token_hash(
        &self,
        hash: &str,
    ) -> Result<Option<AdminSession>, sqlx::Error>;

    async fn find_by_session_id(
        &self,
        session_id: &str,
    ) -> Result<Option<AdminSession>, sqlx::Error>;

    /// Replace the session's refresh material, conditional on the caller
    /// still holding the current hash. Returns `false` when the condition
    /// no longer holds (rotated by a concurrent call, or revoked).
    async fn rotate_refresh_token(
        &self,
        session_id: &str,
        current_refresh_hash: &str,
        input: RotateRefreshToken,
    ) -> Result<bool, sqlx::Error>;

    /// Permanently revoke a session. Returns `false` if it was already
    /// revoked or absent.
    async fn revoke(&self, session_id: &str) -> Result<bool, sqlx::Error>;

    /// Advisory `last_used_at` bump.
    async fn touch_last_used(&self, session_id: &str) -> Result<(), sqlx::Error>;
}

// ---------------------------------------------------------------------------
// Postgres adapters
// ---------------------------------------------------------------------------

/// [`AdminAccountStore`] backed by the `admin_users` table.
pub struct PgAdminAccountStore {
    pool: DbPool,
}

impl PgAdminAccountStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminAccountStore for PgAdminAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, sqlx::Error> {
        AdminUserRepo::find_by_email(&self.pool, email).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<AdminUser>, sqlx::Error> {
        AdminUserRepo::find_by_id(&self.pool, id).await
    }

    async fn record_login(&self, id: DbId) -> Result<(), sqlx::Error> {
        AdminUserRepo::update_last_login(&self.pool, id).await
    }
}

/// [`SessionStore`] backed by the `admin_sessions` table.
pub struct PgSessionStore {
    pool: DbPool,
}

impl PgSessionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn create(&self, input: CreateSession) -> Result<AdminSession, sqlx::Error> {
        SessionRepo::create(&self.pool, &input).await
    }

    async fn find_by_refresh_token_hash(
        &self,
        hash: &str,
    ) -> Result<Option<AdminSession>, sqlx::Error> {
        SessionRepo::find_by_refresh_token_hash(&self.pool, hash).await
    }

    async fn find_by_access_token_hash(
        &self,
        hash: &str,
    ) -> Result<Option<AdminSession>, sqlx::Error> {
        SessionRepo::find_by_access_token_hash(&self.pool, hash).await
    }

    async fn find_by_session_id(
        &self,
        session_id: &str,
    ) -> Result<Option<AdminSession>, sqlx::Error> {
        SessionRepo::find_by_session_id(&self.pool, session_id).await
    }

    async fn rotate_refresh_token(
        &self,
        session_id: &str,
        current_refresh_hash: &str,
        input: RotateRefreshToken,
    ) -> Result<bool, sqlx::Error> {
        SessionRepo::rotate_refresh_token(&self.pool, session_id, current_refresh_hash, &input)
            .await
    }

    async fn revoke(&self, session_id: &str) -> Result<bool, sqlx::Error> {
        SessionRepo::revoke(&self.pool, session_id).await
    }

    async fn touch_last_used(&self, session_id: &str) -> Result<(), sqlx::Error> {
        SessionRepo::touch_last_used(&self.pool, session_id).await
    }
}
