//! SQLite ThemeRepository implementation.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use tracing::debug;

use super::connection::SqliteDatabase;
use super::decode::{decode_bool, decode_required};
use crate::db::{DbError, DbResult, ThemePreference, ThemeRepository};

const ENTITY: &str = "ThemePreference";

/// SQLx-backed repository for the `theme_config` singleton row.
pub struct SqliteThemeRepository<'a> {
    pub(crate) db: &'a SqliteDatabase,
}

impl ThemeRepository for SqliteThemeRepository<'_> {
    async fn save(&self, preference: &ThemePreference) -> DbResult<()> {
        let pool = self.db.pool().await?;

        sqlx::query("INSERT OR REPLACE INTO theme_config (id, isDarkMode) VALUES (?, ?)")
            .bind(preference.id)
            .bind(preference.is_dark_mode)
            .execute(&pool)
            .await
            .map_err(DbError::io)?;

        debug!(
            id = preference.id,
            is_dark_mode = preference.is_dark_mode,
            "Saved theme preference"
        );
        Ok(())
    }

    async fn load(&self) -> DbResult<Option<ThemePreference>> {
        let pool = self.db.pool().await?;

        let row = sqlx::query("SELECT id, isDarkMode FROM theme_config LIMIT 1")
            .fetch_optional(&pool)
            .await
            .map_err(DbError::io)?;

        row.as_ref().map(decode_theme).transpose()
    }
}

/// Convert a `theme_config` row to a ThemePreference.
pub(crate) fn decode_theme(row: &SqliteRow) -> DbResult<ThemePreference> {
    let id: i64 = decode_required(ENTITY, "id", row.try_get("id"))?;
    let is_dark_mode = decode_bool(
        ENTITY,
        "isDarkMode",
        decode_required(ENTITY, "isDarkMode", row.try_get("isDarkMode"))?,
    )?;

    Ok(ThemePreference { id, is_dark_mode })
}
