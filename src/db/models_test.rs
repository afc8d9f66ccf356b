//! Tests for domain models.

use crate::db::models::*;

#[test]
fn new_task_is_unsaved_and_incomplete() {
    let task = Task::new("Buy milk");
    assert_eq!(task.id, None);
    assert_eq!(task.name, "Buy milk");
    assert!(!task.completed);
}

#[test]
fn with_id_keeps_other_fields() {
    let task = Task {
        id: None,
        name: "Walk dog".to_string(),
        completed: true,
    }
    .with_id(7);
    assert_eq!(task.id, Some(7));
    assert_eq!(task.name, "Walk dog");
    assert!(task.completed);
}

#[test]
fn task_completed_defaults_to_false_when_missing() {
    let task: Task = serde_json::from_str(r#"{"id":null,"name":"x"}"#).unwrap();
    assert!(!task.completed);
    assert_eq!(task.id, None);
}

#[test]
fn theme_preference_uses_singleton_key() {
    assert_eq!(ThemePreference::new(true).id, THEME_PREFERENCE_ID);
    assert_eq!(ThemePreference::new(false).id, 1);
}
