//! Repository for the `tech_stack` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::tech_stack::{CreateTechStackEntry, TechStackEntry, UpdateTechStackEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, category, priority, icon_url, is_visible, created_at, updated_at";

/// Provides CRUD operations for tech stack entries.
pub struct TechStackRepo;

impl TechStackRepo {
    /// Insert a new entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTechStackEntry,
    ) -> Result<TechStackEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO tech_stack (name, category, priority, icon_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TechStackEntry>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.priority)
            .bind(&input.icon_url)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TechStackEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tech_stack WHERE id = $1");
        sqlx::query_as::<_, TechStackEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all entries for the admin panel, grouped and ordered.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<TechStackEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tech_stack ORDER BY category, priority, name");
        sqlx::query_as::<_, TechStackEntry>(&query)
            .fetch_all(pool)
            .await
    }

    /// List publicly visible entries, grouped and ordered.
    pub async fn list_visible(pool: &PgPool) -> Result<Vec<TechStackEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tech_stack
             WHERE is_visible = true
             ORDER BY category, priority, name"
        );
        sqlx::query_as::<_, TechStackEntry>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an entry. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTechStackEntry,
    ) -> Result<Option<TechStackEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE tech_stack SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                priority = COALESCE($4, priority),
                icon_url = COALESCE($5, icon_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TechStackEntry>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.priority)
            .bind(&input.icon_url)
            .fetch_optional(pool)
            .await
    }

    /// Flip an entry's visibility, returning the updated row.
    pub async fn toggle_visibility(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TechStackEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE tech_stack SET is_visible = NOT is_visible, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TechStackEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tech_stack WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
