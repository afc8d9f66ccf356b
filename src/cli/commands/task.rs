use tabled::{Table, Tabled};

use crate::app::AppState;
use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::{apply_table_style, format_completed, truncate_with_ellipsis};
use crate::db::{Database, Task};

#[derive(Tabled)]
pub(crate) struct TaskDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: String,
    #[tabled(rename = "Done")]
    pub(crate) done: String,
    #[tabled(rename = "Name")]
    pub(crate) name: String,
}

impl From<&Task> for TaskDisplay {
    fn from(task: &Task) -> Self {
        Self {
            id: task
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            done: format_completed(task.completed),
            name: truncate_with_ellipsis(&task.name, 50),
        }
    }
}

/// List all tasks
pub async fn list_tasks<D: Database>(state: &AppState<D>, format: &str) -> CliResult<String> {
    let tasks = state.tasks().await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&tasks)?),
        _ => Ok(format_table(&tasks)),
    }
}

pub(crate) fn format_table(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let display_tasks: Vec<TaskDisplay> = tasks.iter().map(|t| t.into()).collect();
    let mut table = Table::new(display_tasks);
    apply_table_style(&mut table);
    table.to_string()
}

/// Create a new task
pub async fn add_task<D: Database>(state: &AppState<D>, name: &str) -> CliResult<String> {
    let task = state.add_task(name).await?;
    let id = task.id.unwrap_or_default();
    Ok(format!("✓ Created task: {} ({})", task.name, id))
}

/// Mark a task as complete or incomplete
pub async fn complete_task<D: Database>(
    state: &AppState<D>,
    id: i64,
    completed: bool,
) -> CliResult<String> {
    state
        .set_completed(id, completed)
        .await?
        .ok_or(CliError::TaskNotFound { id })?;

    let label = if completed { "complete" } else { "incomplete" };
    Ok(format!("✓ Task {} marked as {}", id, label))
}

/// Flip the completion state of a task
pub async fn toggle_task<D: Database>(state: &AppState<D>, id: i64) -> CliResult<String> {
    let task = state
        .toggle_task(id)
        .await?
        .ok_or(CliError::TaskNotFound { id })?;

    let label = if task.completed { "complete" } else { "incomplete" };
    Ok(format!("✓ Task {} marked as {}", id, label))
}

/// Rename a task
pub async fn rename_task<D: Database>(
    state: &AppState<D>,
    id: i64,
    name: &str,
) -> CliResult<String> {
    state
        .rename_task(id, name)
        .await?
        .ok_or(CliError::TaskNotFound { id })?;

    Ok(format!("✓ Renamed task {} to: {}", id, name))
}

/// Delete a task
pub async fn delete_task<D: Database>(state: &AppState<D>, id: i64) -> CliResult<String> {
    state.remove_task(id).await?;
    Ok(format!("✓ Deleted task {}", id))
}
