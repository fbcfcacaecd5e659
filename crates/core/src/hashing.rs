//! Shared SHA-256 hex digest utility.
//!
//! Used for server-side token hashing: issued access and refresh tokens are
//! persisted only as digests, never as raw strings.

use sha2::{Digest, Sha256};

/// Compute a SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}
