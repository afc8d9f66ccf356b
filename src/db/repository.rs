//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.

use crate::db::{
    DbResult,
    models::{Task, ThemePreference},
};

/// Repository for Task operations.
///
/// Writes against an id that matches no row are silent no-ops.
pub trait TaskRepository {
    /// Insert a task, replacing any row sharing an explicitly supplied id.
    /// Returns the id the row was stored under.
    fn create(&self, task: &Task) -> impl Future<Output = DbResult<i64>> + Send;

    /// All tasks in storage order.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Task>>> + Send;

    /// Get a task by ID.
    fn get(&self, id: i64) -> impl Future<Output = DbResult<Option<Task>>> + Send;

    /// Replace name and completed of the task matching `task.id`.
    fn update(&self, task: &Task) -> impl Future<Output = DbResult<()>> + Send;

    /// Delete a task by ID. Returns whether a row was removed.
    fn delete(&self, id: i64) -> impl Future<Output = DbResult<bool>> + Send;
}

/// Repository for the theme preference singleton.
pub trait ThemeRepository {
    /// Upsert the preference row.
    fn save(&self, preference: &ThemePreference) -> impl Future<Output = DbResult<()>> + Send;

    /// The stored preference, or `None` if it was never saved.
    fn load(&self) -> impl Future<Output = DbResult<Option<ThemePreference>>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    type Tasks<'a>: TaskRepository + Send + Sync
    where
        Self: 'a;
    type Theme<'a>: ThemeRepository + Send + Sync
    where
        Self: 'a;

    /// Create the schema if it does not exist yet.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Release the underlying handle. Later operations reopen it.
    fn close(&self) -> impl Future<Output = ()> + Send;

    /// Get the task repository.
    fn tasks(&self) -> Self::Tasks<'_>;

    /// Get the theme preference repository.
    fn theme(&self) -> Self::Theme<'_>;
}
