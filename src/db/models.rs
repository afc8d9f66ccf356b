//! Domain models for the task list database.
//!
//! These models are storage-agnostic value objects. They are copied in and
//! out of the store and never hold a handle to it.

use serde::{Deserialize, Serialize};

/// Primary key of the single theme preference row.
pub const THEME_PREFERENCE_ID: i64 = 1;

/// A named task that can be completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned id. `None` until the task has been inserted.
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// A fresh, not yet persisted task.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            completed: false,
        }
    }

    /// Copy of this task carrying the given id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Light/dark display preference, stored as a singleton row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreference {
    pub id: i64,
    pub is_dark_mode: bool,
}

impl ThemePreference {
    /// Preference keyed by [`THEME_PREFERENCE_ID`].
    pub fn new(is_dark_mode: bool) -> Self {
        Self {
            id: THEME_PREFERENCE_ID,
            is_dark_mode,
        }
    }
}
