//! Application state shared by the views of the task list.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::debug;

use super::notifier::{ChangeNotifier, UpdateMessage};
use crate::db::{Database, DbResult, Task, TaskRepository, ThemePreference, ThemeRepository};

/// Shared application state.
///
/// Holds the store and the change notifier. Views receive it by reference
/// and call [`AppState::subscribe`] to react to task and theme changes.
/// Notifications are sent only after the write has succeeded.
pub struct AppState<D: Database> {
    db: Arc<D>,
    notifier: ChangeNotifier,
}

// Manual Clone impl - only the Arc is cloned, D need not be Clone
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            notifier: self.notifier.clone(),
        }
    }
}

impl<D: Database> AppState<D> {
    /// Create a new AppState with the given database and notifier.
    pub fn new(db: D, notifier: ChangeNotifier) -> Self {
        Self {
            db: Arc::new(db),
            notifier,
        }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }

    /// Register an observer for subsequent changes.
    pub fn subscribe(&self) -> broadcast::Receiver<UpdateMessage> {
        self.notifier.subscribe()
    }

    pub async fn tasks(&self) -> DbResult<Vec<Task>> {
        self.db.tasks().list().await
    }

    /// Persist a new task and return it with its assigned id.
    pub async fn add_task(&self, name: &str) -> DbResult<Task> {
        let task = Task::new(name);
        let id = self.db.tasks().create(&task).await?;
        self.notifier
            .notify(UpdateMessage::TaskCreated { task_id: id });
        Ok(task.with_id(id))
    }

    pub async fn rename_task(&self, id: i64, name: &str) -> DbResult<Option<Task>> {
        self.modify_task(id, |task| task.name = name.to_string())
            .await
    }

    pub async fn set_completed(&self, id: i64, completed: bool) -> DbResult<Option<Task>> {
        self.modify_task(id, |task| task.completed = completed).await
    }

    pub async fn toggle_task(&self, id: i64) -> DbResult<Option<Task>> {
        self.modify_task(id, |task| task.completed = !task.completed)
            .await
    }

    /// Delete a task. Deleting a missing id is not an error and sends no
    /// notification. Returns whether a task was removed.
    pub async fn remove_task(&self, id: i64) -> DbResult<bool> {
        let removed = self.db.tasks().delete(id).await?;
        if removed {
            self.notifier
                .notify(UpdateMessage::TaskDeleted { task_id: id });
        }
        Ok(removed)
    }

    /// Stored preference; light mode when nothing was saved yet.
    pub async fn is_dark_mode(&self) -> DbResult<bool> {
        Ok(self
            .db
            .theme()
            .load()
            .await?
            .is_some_and(|p| p.is_dark_mode))
    }

    pub async fn set_dark_mode(&self, is_dark_mode: bool) -> DbResult<()> {
        self.db
            .theme()
            .save(&ThemePreference::new(is_dark_mode))
            .await?;
        self.notifier
            .notify(UpdateMessage::ThemeChanged { is_dark_mode });
        Ok(())
    }

    /// Flip the theme and return the new value.
    pub async fn toggle_theme(&self) -> DbResult<bool> {
        let is_dark_mode = !self.is_dark_mode().await?;
        self.set_dark_mode(is_dark_mode).await?;
        Ok(is_dark_mode)
    }

    /// Release the store. Call once no further operations are expected.
    pub async fn shutdown(&self) {
        self.db.close().await;
    }

    /// Read-modify-write of a single task. `Ok(None)` if the id is unknown.
    async fn modify_task<F>(&self, id: i64, change: F) -> DbResult<Option<Task>>
    where
        F: FnOnce(&mut Task),
    {
        let repo = self.db.tasks();
        let Some(mut task) = repo.get(id).await? else {
            debug!(id, "Task not found, nothing to modify");
            return Ok(None);
        };

        change(&mut task);
        repo.update(&task).await?;
        self.notifier
            .notify(UpdateMessage::TaskUpdated { task_id: id });
        Ok(Some(task))
    }
}
