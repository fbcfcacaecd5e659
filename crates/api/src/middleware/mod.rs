//! Authentication middleware extractors.
//!
//! - [`auth::AdminUser`] -- extracts the authenticated admin from a Bearer
//!   access token, running the full engine validation (signature, session
//!   state, stored expiry).

pub mod auth;
