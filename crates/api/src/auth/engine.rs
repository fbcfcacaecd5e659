//! Session-based authentication engine.
//!
//! Orchestrates login, token refresh, logout, and access-token validation
//! against the account/session stores. Every signed token is bound to a
//! server-side session row: signature validity alone is never sufficient,
//! the row must also be live (not revoked, stored expiry in the future).
//!
//! Failure modes are kept as distinct [`AuthError`] variants for logging
//! and tests; the HTTP boundary collapses them into one generic
//! unauthorized response so callers cannot probe which check failed.

use std::sync::Arc;

use chrono::Utc;
use folio_core::hashing::sha256_hex;
use folio_core::ttl::parse_ttl;
use folio_core::types::Timestamp;
use folio_db::models::admin_user::{AdminSummary, AdminUser};
use folio_db::models::session::{CreateSession, RotateRefreshToken};

use crate::auth::jwt::{sign_token, verify_token, AuthConfig, TokenPayload, TokenType};
use crate::auth::password::verify_password;
use crate::auth::store::{AdminAccountStore, SessionStore};

/// Internal failure taxonomy. Never serialized to clients as-is.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Unknown email or wrong password -- intentionally indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Account exists but is deactivated.
    #[error("Account is inactive")]
    AccountInactive,

    /// Signature failure, malformed token, elapsed signed expiry, or wrong
    /// token type for the operation.
    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    /// Refresh hash not found among live sessions: unknown, revoked,
    /// expired at the store level, or already rotated away.
    #[error("Invalid or revoked refresh token")]
    InvalidOrRevokedToken,

    /// The session row found by hash does not carry the payload's session id.
    #[error("Session mismatch")]
    SessionMismatch,

    /// No session row for the payload's session id, or the row is revoked.
    #[error("Session not found or revoked")]
    SessionNotFoundOrRevoked,

    /// Stored access expiry elapsed even though the signature still verifies.
    #[error("Access token expired")]
    AccessTokenExpired,

    /// Account vanished or was deactivated between issuance and refresh.
    #[error("User not found or inactive")]
    UserNotFoundOrInactive,

    /// Store failure (maps to 500, not 401).
    #[error("Session store error: {0}")]
    Store(#[from] sqlx::Error),

    /// Password hash parsing/verification failure (maps to 500).
    #[error("Password verification error: {0}")]
    PasswordHash(String),

    /// Token signing failure (maps to 500).
    #[error("Token signing error: {0}")]
    Signing(jsonwebtoken::errors::Error),
}

/// Request provenance captured at login, stored write-once on the session.
#[derive(Debug, Clone, Default)]
pub struct ClientContext {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub device_info: Option<serde_json::Value>,
}

/// Successful login result: both raw tokens plus a public-safe summary.
#[derive(Debug)]
pub struct LoginTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub admin: AdminSummary,
}

/// Successful refresh result: a fully rotated token pair.
#[derive(Debug)]
pub struct RefreshedTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// A freshly minted token pair with the expiries to persist alongside.
struct MintedPair {
    access_token: String,
    access_expires_at: Timestamp,
    refresh_token: String,
    refresh_expires_at: Timestamp,
}

/// The authentication engine.
///
/// Holds the store seams and token configuration; each operation is a
/// self-contained unit of work with no in-memory session state.
pub struct AuthService {
    accounts: Arc<dyn AdminAccountStore>,
    sessions: Arc<dyn SessionStore>,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(
        accounts: Arc<dyn AdminAccountStore>,
        sessions: Arc<dyn SessionStore>,
        config: AuthConfig,
    ) -> Self {
        Self {
            accounts,
            sessions,
            config,
        }
    }

    /// Convenience constructor wiring the Postgres store adapters.
    pub fn postgres(pool: folio_db::DbPool, config: AuthConfig) -> Self {
        use crate::auth::store::{PgAdminAccountStore, PgSessionStore};
        Self::new(
            Arc::new(PgAdminAccountStore::new(pool.clone())),
            Arc::new(PgSessionStore::new(pool)),
            config,
        )
    }

    /// Authenticate with email + password, creating a new session.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        ctx: ClientContext,
    ) -> Result<LoginTokens, AuthError> {
        // 1. Find the account. Absent email fails exactly like a wrong
        //    password so callers cannot enumerate accounts.
        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // 2. Deactivated accounts cannot authenticate.
        if !account.is_active {
            return Err(AuthError::AccountInactive);
        }

        // 3. Verify the password against the stored hash.
        let password_valid = verify_password(password, &account.password_hash)
            .map_err(|e| AuthError::PasswordHash(e.to_string()))?;
        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        // 4. Fresh random session handle, shared by both tokens.
        let session_id = uuid::Uuid::new_v4().to_string();

        // 5-7. Mint the pair and compute the stored expiries.
        let pair = self.mint_pair(&account, &session_id)?;

        // 8. Persist the session with token hashes only -- never raw tokens.
        self.sessions
            .create(CreateSession {
                admin_user_id: account.id,
                session_id,
                access_token_hash: sha256_hex(pair.access_token.as_bytes()),
                refresh_token_hash: sha256_hex(pair.refresh_token.as_bytes()),
                access_token_expires_at: pair.access_expires_at,
                refresh_token_expires_at: pair.refresh_expires_at,
                ip_address: ctx.ip_address,
                user_agent: ctx.user_agent,
                device_info: ctx.device_info,
            })
            .await?;

        // 9. Record the login on the account.
        self.accounts.record_login(account.id).await?;

        tracing::info!(admin_id = account.id, "Admin logged in");

        // 10. Raw tokens go to the caller; hashes stay server-side.
        Ok(LoginTokens {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            admin: account.summary(),
        })
    }

    /// Exchange a valid refresh token for a new pair, rotating the stored
    /// refresh material in place (single-use refresh tokens).
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshedTokens, AuthError> {
        // 1. Signature + embedded expiry against the refresh secret.
        let payload = verify_token(refresh_token, &self.config.refresh_token_secret)
            .map_err(|_| AuthError::InvalidOrExpiredToken)?;

        // 2. Type confusion is treated identically to an invalid token.
        if payload.token_type != TokenType::Refresh {
            return Err(AuthError::InvalidOrExpiredToken);
        }

        // 3. Live-session lookup by the presented token's hash.
        let presented_hash = sha256_hex(refresh_token.as_bytes());
        let session = self
            .sessions
            .find_by_refresh_token_hash(&presented_hash)
            .await?
            .ok_or(AuthError::InvalidOrRevokedToken)?;

        // 4. Second, independent binding between token and row.
        if session.session_id != payload.session_id {
            return Err(AuthError::SessionMismatch);
        }

        // 5. The owning account must still exist and be active.
        let account = self
            .accounts
            .find_by_id(payload.sub)
            .await?
            .filter(|a| a.is_active)
            .ok_or(AuthError::UserNotFoundOrInactive)?;

        // 6. Mint a full new pair bound to the existing session id.
        let pair = self.mint_pair(&account, &session.session_id)?;

        // 7. Rotate in place, conditional on the hash we just looked up.
        //    A concurrent refresh that won the race leaves nothing for us
        //    to update; the token is spent either way.
        let rotated = self
            .sessions
            .rotate_refresh_token(
                &session.session_id,
                &presented_hash,
                RotateRefreshToken {
                    refresh_token_hash: sha256_hex(pair.refresh_token.as_bytes()),
                    refresh_token_expires_at: pair.refresh_expires_at,
                },
            )
            .await?;
        if !rotated {
            return Err(AuthError::InvalidOrRevokedToken);
        }

        tracing::debug!(admin_id = account.id, "Refresh token rotated");

        // 8. The previous access token is NOT revoked here; it stays valid
        //    until its own expiry.
        Ok(RefreshedTokens {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        })
    }

    /// Revoke the session named by a valid access token.
    ///
    /// Logging out a session that no longer exists succeeds silently.
    pub async fn logout(&self, access_token: &str) -> Result<(), AuthError> {
        // 1. Signature + embedded expiry against the access secret.
        let payload = verify_token(access_token, &self.config.access_token_secret)
            .map_err(|_| AuthError::InvalidOrExpiredToken)?;

        // 2. Only access tokens may log out.
        if payload.token_type != TokenType::Access {
            return Err(AuthError::InvalidOrExpiredToken);
        }

        // 3. Missing session means there is nothing left to revoke.
        let Some(session) = self
            .sessions
            .find_by_session_id(&payload.session_id)
            .await?
        else {
            return Ok(());
        };

        // 4. One-way revocation; repeat calls are no-ops.
        self.sessions.revoke(&session.session_id).await?;

        tracing::info!(admin_id = payload.sub, "Admin logged out");
        Ok(())
    }

    /// Validate an access token for request authorization.
    ///
    /// Beyond the signature, the session row must exist, be unrevoked, and
    /// its *stored* access expiry must not have elapsed -- an operator can
    /// shorten a live session's effective lifetime without touching the
    /// signing secret.
    pub async fn validate_access_token(
        &self,
        access_token: &str,
    ) -> Result<TokenPayload, AuthError> {
        // 1-2. Signature, embedded expiry, token type.
        let payload = verify_token(access_token, &self.config.access_token_secret)
            .map_err(|_| AuthError::InvalidOrExpiredToken)?;
        if payload.token_type != TokenType::Access {
            return Err(AuthError::InvalidOrExpiredToken);
        }

        // 3. The session must exist and be live.
        let session = self
            .sessions
            .find_by_session_id(&payload.session_id)
            .await?
            .ok_or(AuthError::SessionNotFoundOrRevoked)?;
        if session.is_revoked {
            return Err(AuthError::SessionNotFoundOrRevoked);
        }

        // 4. Server-side expiry check, independent of the signed claim.
        if session.access_token_expires_at < Utc::now() {
            return Err(AuthError::AccessTokenExpired);
        }

        // 5. Advisory usage bookkeeping.
        self.sessions.touch_last_used(&session.session_id).await?;

        Ok(payload)
    }

    /// Mint an access/refresh pair sharing one session id.
    ///
    /// The stored expiries are computed from the same TTL expressions as
    /// the signed `exp` claims, so row and token agree under correct
    /// configuration.
    fn mint_pair(&self, account: &AdminUser, session_id: &str) -> Result<MintedPair, AuthError> {
        let access_ttl = parse_ttl(&self.config.access_token_ttl);
        let refresh_ttl = parse_ttl(&self.config.refresh_token_ttl);

        let access_payload = TokenPayload::new(
            account.id,
            &account.email,
            session_id,
            TokenType::Access,
            access_ttl,
        );
        let refresh_payload = TokenPayload::new(
            account.id,
            &account.email,
            session_id,
            TokenType::Refresh,
            refresh_ttl,
        );

        let access_token = sign_token(&access_payload, &self.config.access_token_secret)
            .map_err(AuthError::Signing)?;
        let refresh_token = sign_token(&refresh_payload, &self.config.refresh_token_secret)
            .map_err(AuthError::Signing)?;

        let now = Utc::now();
        Ok(MintedPair {
            access_token,
            access_expires_at: now + access_ttl,
            refresh_token,
            refresh_expires_at: now + refresh_ttl,
        })
    }
}
