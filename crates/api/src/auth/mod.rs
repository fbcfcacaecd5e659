//! Authentication primitives and the session-based auth engine.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- token codec: signed, time-bound payloads with per-family
//!   secrets and TTLs.
//! - [`store`] -- session/account store contracts and Postgres adapters.
//! - [`engine`] -- the [`engine::AuthService`] orchestrating login, refresh,
//!   logout, and access-token validation.

pub mod engine;
pub mod jwt;
pub mod password;
pub mod store;
