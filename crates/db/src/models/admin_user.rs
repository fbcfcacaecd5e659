//! Admin account model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full admin account row from the `admin_users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`AdminSummary`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AdminUser {
    /// Public-safe view of this account (no password hash).
    pub fn summary(&self) -> AdminSummary {
        AdminSummary {
            id: self.id,
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

/// Safe account representation embedded in auth responses.
#[derive(Debug, Clone, Serialize)]
pub struct AdminSummary {
    pub id: DbId,
    pub email: String,
    pub role: String,
}

/// DTO for creating a new admin account (seed script / `create-admin` bin).
pub struct CreateAdminUser {
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
