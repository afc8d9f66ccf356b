//! Tests for database error types.

use crate::db::{DbError, DbResult};

#[test]
fn storage_unavailable_error_displays_correctly() {
    let err = DbError::StorageUnavailable {
        message: "unable to open database file".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Storage unavailable: unable to open database file"
    );
}

#[test]
fn io_error_displays_correctly() {
    let err = DbError::Io {
        message: "disk I/O error".to_string(),
    };
    assert_eq!(err.to_string(), "I/O failure: disk I/O error");
}

#[test]
fn decode_error_names_the_entity() {
    let err = DbError::Decode {
        entity_type: "Task",
        message: "column 'name' is NULL".to_string(),
    };
    assert_eq!(err.to_string(), "Malformed Task row: column 'name' is NULL");
}

#[test]
fn constructors_capture_display_text() {
    match DbError::unavailable("locked") {
        DbError::StorageUnavailable { message } => assert_eq!(message, "locked"),
        other => panic!("unexpected variant: {other:?}"),
    }
    match DbError::io("short write") {
        DbError::Io { message } => assert_eq!(message, "short write"),
        other => panic!("unexpected variant: {other:?}"),
    }
}

#[test]
fn db_result_propagates_with_question_mark() {
    fn inner() -> DbResult<()> {
        Err(DbError::io("boom"))
    }
    fn outer() -> DbResult<u8> {
        inner()?;
        Ok(1)
    }
    assert!(matches!(outer(), Err(DbError::Io { .. })));
}
