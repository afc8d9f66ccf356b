use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DbError),

    #[error("Task {id} not found")]
    #[diagnostic(
        code(tasklist::cli::task_not_found),
        help("Run `tasklist list` to see the ids of existing tasks.")
    )]
    TaskNotFound { id: i64 },

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(tasklist::cli::output))]
    Output { message: String },
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
