//! # Preference Repository
//!
//! Key/value rows in the `preferences` table.
//!
//! Values are opaque strings. The site stores one row today:
//! `clinivet-theme` = `"light" | "dark"`.

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};

/// Repository for preference rows.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.preferences();
/// repo.set("clinivet-theme", "dark").await?;
/// assert_eq!(repo.get("clinivet-theme").await?, Some("dark".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct PreferenceRepository {
    pool: SqlitePool,
}

impl PreferenceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        PreferenceRepository { pool }
    }

    /// Reads a preference. Missing keys are `Ok(None)`.
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        debug!(key = %key, "Reading preference");

        let row = sqlx::query("SELECT value FROM preferences WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(row.try_get("value")?)),
            None => Ok(None),
        }
    }

    /// Writes a preference, replacing any previous value.
    pub async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        if key.trim().is_empty() {
            return Err(DbError::EmptyKey);
        }

        debug!(key = %key, value = %value, "Writing preference");

        sqlx::query(
            r#"
            INSERT INTO preferences (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
