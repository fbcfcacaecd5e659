//! Tech stack entry model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tech_stack` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TechStackEntry {
    pub id: DbId,
    pub name: String,
    /// Grouping key for the public site (e.g. `"backend"`, `"tooling"`).
    pub category: String,
    /// Sort position within a category (ascending).
    pub priority: i32,
    pub icon_url: Option<String>,
    pub is_visible: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new tech stack entry.
#[derive(Debug, Deserialize)]
pub struct CreateTechStackEntry {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub priority: i32,
    pub icon_url: Option<String>,
}

/// DTO for updating an existing entry. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateTechStackEntry {
    pub name: Option<String>,
    pub category: Option<String>,
    pub priority: Option<i32>,
    pub icon_url: Option<String>,
}
