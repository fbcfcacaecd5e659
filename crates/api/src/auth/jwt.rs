//! Token codec: signing and verification of access/refresh tokens.
//!
//! Both token families are HS256-signed JWTs carrying a [`TokenPayload`].
//! Access and refresh tokens are signed with *independent* secrets, so a
//! leaked access-token secret cannot be used to mint long-lived refresh
//! tokens. Verification checks the signature and the embedded expiry but
//! deliberately does NOT check the `type` claim -- callers must assert the
//! expected [`TokenType`] themselves.

use chrono::{Duration, Utc};
use folio_core::types::DbId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Discriminates the two token families sharing one payload shape.
///
/// Stored in the `type` claim; prevents a refresh token from being accepted
/// where an access token is expected and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Claims embedded in every signed token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Subject -- the admin account's internal database id.
    pub sub: DbId,
    pub email: String,
    /// Opaque session handle shared by both tokens of one login.
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

impl TokenPayload {
    /// Build a payload expiring `ttl` from now.
    pub fn new(
        sub: DbId,
        email: &str,
        session_id: &str,
        token_type: TokenType,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();
        Self {
            sub,
            email: email.to_string(),
            session_id: session_id.to_string(),
            token_type,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        }
    }
}

/// Token configuration: independent signing secrets and TTL expressions
/// for the access and refresh families.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 secret for access tokens.
    pub access_token_secret: String,
    /// HMAC-SHA256 secret for refresh tokens. Must differ from the access
    /// secret so one family's compromise does not extend to the other.
    pub refresh_token_secret: String,
    /// Access token TTL expression (default: `"15m"`).
    pub access_token_ttl: String,
    /// Refresh token TTL expression (default: `"7d"`).
    pub refresh_token_ttl: String,
}

impl AuthConfig {
    /// Load token configuration from environment variables.
    ///
    /// | Env Var                        | Required | Default |
    /// |--------------------------------|----------|---------|
    /// | `JWT_ACCESS_TOKEN_SECRET`      | **yes**  | --      |
    /// | `JWT_REFRESH_TOKEN_SECRET`     | **yes**  | --      |
    /// | `JWT_ACCESS_TOKEN_EXPIRES_IN`  | no       | `15m`   |
    /// | `JWT_REFRESH_TOKEN_EXPIRES_IN` | no       | `7d`    |
    ///
    /// # Panics
    ///
    /// Panics if either secret is not set or is empty.
    pub fn from_env() -> Self {
        let access_token_secret = std::env::var("JWT_ACCESS_TOKEN_SECRET")
            .expect("JWT_ACCESS_TOKEN_SECRET must be set in the environment");
        assert!(
            !access_token_secret.is_empty(),
            "JWT_ACCESS_TOKEN_SECRET must not be empty"
        );

        let refresh_token_secret = std::env::var("JWT_REFRESH_TOKEN_SECRET")
            .expect("JWT_REFRESH_TOKEN_SECRET must be set in the environment");
        assert!(
            !refresh_token_secret.is_empty(),
            "JWT_REFRESH_TOKEN_SECRET must not be empty"
        );

        let access_token_ttl =
            std::env::var("JWT_ACCESS_TOKEN_EXPIRES_IN").unwrap_or_else(|_| "15m".into());
        let refresh_token_ttl =
            std::env::var("JWT_REFRESH_TOKEN_EXPIRES_IN").unwrap_or_else(|_| "7d".into());

        Self {
            access_token_secret,
            refresh_token_secret,
            access_token_ttl,
            refresh_token_ttl,
        }
    }
}

/// Sign a payload with the given family secret, producing a compact token.
pub fn sign_token(
    payload: &TokenPayload,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(), // HS256
        payload,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify a token's signature and embedded expiry, returning the payload.
///
/// Fails on a bad signature, malformed token, or elapsed `exp` claim. The
/// `type` claim is decoded but not checked here.
pub fn verify_token(
    token: &str,
    secret: &str,
) -> Result<TokenPayload, jsonwebtoken::errors::Error> {
    let token_data = decode::<TokenPayload>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
