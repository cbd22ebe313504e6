//! Repository for the `update_history` table.

use sqlx::PgPool;

use crate::models::history::{CreateHistoryEntry, HistoryEntry};

const COLUMNS: &str = "id, timestamp, description, effort_hours, claude_prompt";

/// Append-only work history log.
pub struct HistoryRepo;

impl HistoryRepo {
    /// Append an entry; the id and timestamp are assigned by the database.
    pub async fn create(
        pool: &PgPool,
        input: &CreateHistoryEntry,
    ) -> Result<HistoryEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO update_history (description, effort_hours, claude_prompt)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HistoryEntry>(&query)
            .bind(&input.description)
            .bind(input.effort_hours)
            .bind(&input.claude_prompt)
            .fetch_one(pool)
            .await
    }

    /// All entries, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<HistoryEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM update_history ORDER BY timestamp DESC, id DESC");
        sqlx::query_as::<_, HistoryEntry>(&query)
            .fetch_all(pool)
            .await
    }
}
