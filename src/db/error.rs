//! Database error types.
//!
//! This module provides abstracted error types for database operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Storage unavailable: {message}")]
    #[diagnostic(
        code(tasklist::db::storage_unavailable),
        help("Check that the database file is readable and the disk is not full.")
    )]
    StorageUnavailable { message: String },

    #[error("I/O failure: {message}")]
    #[diagnostic(code(tasklist::db::io_failure))]
    Io { message: String },

    #[error("Malformed {entity_type} row: {message}")]
    #[diagnostic(code(tasklist::db::decode))]
    Decode {
        entity_type: &'static str,
        message: String,
    },
}

impl DbError {
    pub(crate) fn unavailable(e: impl std::fmt::Display) -> Self {
        DbError::StorageUnavailable {
            message: e.to_string(),
        }
    }

    pub(crate) fn io(e: impl std::fmt::Display) -> Self {
        DbError::Io {
            message: e.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
