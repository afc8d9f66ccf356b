//! Shared helpers for turning SQLite columns into model fields.

use crate::db::{DbError, DbResult};

/// Unwrap a nullable column, failing with a decode error on type mismatch or NULL.
pub fn decode_required<T>(
    entity_type: &'static str,
    column: &str,
    value: Result<Option<T>, sqlx::Error>,
) -> DbResult<T> {
    value
        .map_err(|e| DbError::Decode {
            entity_type,
            message: format!("column '{}': {}", column, e),
        })?
        .ok_or_else(|| DbError::Decode {
            entity_type,
            message: format!("column '{}' is NULL", column),
        })
}

/// Booleans are stored as 0/1 integers; anything else is malformed.
pub fn decode_bool(entity_type: &'static str, column: &str, value: i64) -> DbResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(DbError::Decode {
            entity_type,
            message: format!("column '{}' holds {}, expected 0 or 1", column, other),
        }),
    }
}
