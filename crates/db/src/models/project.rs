//! Portfolio project model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    /// URL-safe unique identifier used by the public site.
    pub slug: String,
    pub summary: Option<String>,
    pub is_featured: bool,
    /// `"active"` rows are shown publicly; anything else is admin-only.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    pub status: Option<String>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub is_featured: Option<bool>,
    pub status: Option<String>,
}
