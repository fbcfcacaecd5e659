//! Domain primitives shared across the folio backend.
//!
//! This crate is deliberately free of I/O: type aliases, the domain error
//! enum, and small pure helpers (digests, TTL expressions) live here so both
//! the database and API crates can depend on them without pulling in sqlx
//! or axum.

pub mod error;
pub mod hashing;
pub mod ttl;
pub mod types;
