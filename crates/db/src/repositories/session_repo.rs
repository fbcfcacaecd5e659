//! Repository for the `admin_sessions` table.
//!
//! Lookup methods that feed token validation filter on revocation and the
//! stored expiry columns, so a revoked or expired row is indistinguishable
//! from a missing one at the call site.

use sqlx::PgPool;

use crate::models::session::{AdminSession, CreateSession, RotateRefreshToken};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, admin_user_id, session_id, access_token_hash, refresh_token_hash, \
                        access_token_expires_at, refresh_token_expires_at, is_revoked, revoked_at, \
                        ip_address, user_agent, device_info, last_used_at, created_at, updated_at";

/// Provides persistence operations for admin sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<AdminSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_sessions
                (admin_user_id, session_id, access_token_hash, refresh_token_hash,
                 access_token_expires_at, refresh_token_expires_at,
                 ip_address, user_agent, device_info, last_used_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW())
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminSession>(&query)
            .bind(input.admin_user_id)
            .bind(&input.session_id)
            .bind(&input.access_token_hash)
            .bind(&input.refresh_token_hash)
            .bind(input.access_token_expires_at)
            .bind(input.refresh_token_expires_at)
            .bind(&input.ip_address)
            .bind(&input.user_agent)
            .bind(&input.device_info)
            .fetch_one(pool)
            .await
    }

    /// Find a live session by its refresh token hash.
    ///
    /// Only returns sessions that are not revoked and whose stored refresh
    /// expiry is still in the future.
    pub async fn find_by_refresh_token_hash(
        pool: &PgPool,
        hash: &str,
    ) -> Result<Option<AdminSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM admin_sessions
             WHERE refresh_token_hash = $1
               AND is_revoked = false
               AND refresh_token_expires_at > NOW()"
        );
        sqlx::query_as::<_, AdminSession>(&query)
            .bind(hash)
            .fetch_optional(pool)
            .await
    }

    /// Find a live session by its access token hash.
    ///
    /// Filters on revocation and the stored access expiry, matching
    /// [`Self::find_by_refresh_token_hash`].
    pub async fn find_by_access_token_hash(
        pool: &PgPool,
        hash: &str,
    ) -> Result<Option<AdminSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM admin_sessions
             WHERE access_token_hash = $1
               AND is_revoked = false
               AND access_token_expires_at > NOW()"
        );
        sqlx::query_as::<_, AdminSession>(&query)
            .bind(hash)
            .fetch_optional(pool)
            .await
    }

    /// Find a session by its opaque session id, regardless of state.
    ///
    /// Revocation and expiry are checked by the caller, which needs to
    /// distinguish "absent" from "revoked" from "expired".
    pub async fn find_by_session_id(
        pool: &PgPool,
        session_id: &str,
    ) -> Result<Option<AdminSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admin_sessions WHERE session_id = $1");
        sqlx::query_as::<_, AdminSession>(&query)
            .bind(session_id)
            .fetch_optional(pool)
            .await
    }

    /// Rotate a session's refresh material in place.
    ///
    /// The update is conditional on the hash the caller just looked up:
    /// `WHERE session_id = $1 AND refresh_token_hash = $2 AND is_revoked =
    /// false`. Of two concurrent refresh calls racing on one token, exactly
    /// one matches; the other sees `false` and must treat the token as spent.
    pub async fn rotate_refresh_token(
        pool: &PgPool,
        session_id: &str,
        current_refresh_hash: &str,
        input: &RotateRefreshToken,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE admin_sessions SET
                refresh_token_hash = $3,
                refresh_token_expires_at = $4,
                last_used_at = NOW(),
                updated_at = NOW()
             WHERE session_id = $1
               AND refresh_token_hash = $2
               AND is_revoked = false",
        )
        .bind(session_id)
        .bind(current_refresh_hash)
        .bind(&input.refresh_token_hash)
        .bind(input.refresh_token_expires_at)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Revoke a session permanently. Returns `true` if the row was updated.
    ///
    /// Revocation is one-way; there is no un-revoke.
    pub async fn revoke(pool: &PgPool, session_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE admin_sessions SET
                is_revoked = true,
                revoked_at = NOW(),
                updated_at = NOW()
             WHERE session_id = $1 AND is_revoked = false",
        )
        .bind(session_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Advisory `last_used_at` bump on token validation.
    pub async fn touch_last_used(pool: &PgPool, session_id: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE admin_sessions SET last_used_at = NOW(), updated_at = NOW()
             WHERE session_id = $1",
        )
        .bind(session_id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
