//! SQLite TaskRepository implementation.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use tracing::debug;

use super::connection::SqliteDatabase;
use super::decode::{decode_bool, decode_required};
use crate::db::{DbError, DbResult, Task, TaskRepository};

const ENTITY: &str = "Task";

/// SQLx-backed task repository over the `items` table.
pub struct SqliteTaskRepository<'a> {
    pub(crate) db: &'a SqliteDatabase,
}

impl TaskRepository for SqliteTaskRepository<'_> {
    async fn create(&self, task: &Task) -> DbResult<i64> {
        let pool = self.db.pool().await?;

        // A NULL id lets SQLite assign the next one
        let result =
            sqlx::query("INSERT OR REPLACE INTO items (id, name, completed) VALUES (?, ?, ?)")
                .bind(task.id)
                .bind(&task.name)
                .bind(task.completed)
                .execute(&pool)
                .await
                .map_err(DbError::io)?;

        let id = result.last_insert_rowid();
        debug!(id, "Inserted task");
        Ok(id)
    }

    async fn list(&self) -> DbResult<Vec<Task>> {
        let pool = self.db.pool().await?;

        let rows = sqlx::query("SELECT id, name, completed FROM items")
            .fetch_all(&pool)
            .await
            .map_err(DbError::io)?;

        rows.iter().map(decode_task).collect()
    }

    async fn get(&self, id: i64) -> DbResult<Option<Task>> {
        let pool = self.db.pool().await?;

        let row = sqlx::query("SELECT id, name, completed FROM items WHERE id = ?")
            .bind(id)
            .fetch_optional(&pool)
            .await
            .map_err(DbError::io)?;

        row.as_ref().map(decode_task).transpose()
    }

    async fn update(&self, task: &Task) -> DbResult<()> {
        let Some(id) = task.id else {
            debug!("Skipping update of unsaved task");
            return Ok(());
        };
        let pool = self.db.pool().await?;

        let result = sqlx::query("UPDATE items SET name = ?, completed = ? WHERE id = ?")
            .bind(&task.name)
            .bind(task.completed)
            .bind(id)
            .execute(&pool)
            .await
            .map_err(DbError::io)?;

        debug!(id, rows = result.rows_affected(), "Updated task");
        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<bool> {
        let pool = self.db.pool().await?;

        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&pool)
            .await
            .map_err(DbError::io)?;

        debug!(id, rows = result.rows_affected(), "Deleted task");
        Ok(result.rows_affected() > 0)
    }
}

/// Convert an `items` row to a Task, validating every column.
pub(crate) fn decode_task(row: &SqliteRow) -> DbResult<Task> {
    let id: i64 = decode_required(ENTITY, "id", row.try_get("id"))?;
    let name: String = decode_required(ENTITY, "name", row.try_get("name"))?;
    let completed = decode_bool(
        ENTITY,
        "completed",
        decode_required(ENTITY, "completed", row.try_get("completed"))?,
    )?;

    Ok(Task {
        id: Some(id),
        name,
        completed,
    })
}
