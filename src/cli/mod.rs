mod commands;
pub mod error;
pub mod utils;

#[cfg(test)]
mod utils_test;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::{AppState, ChangeNotifier};
use crate::db::SqliteDatabase;
use crate::paths::get_db_path;
use error::CliResult;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(author, version, about = "Task list with local persistence", long_about = None)]
pub struct Cli {
    /// Database file path (defaults to XDG data directory: ~/.local/share/tasklist/tasklist.db)
    #[arg(long, global = true, env = "TASKLIST_DB")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task name
        name: String,
    },
    /// List all tasks
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Mark a task as complete
    Done {
        /// Task ID
        id: i64,
    },
    /// Mark a task as not complete
    Undone {
        /// Task ID
        id: i64,
    },
    /// Flip the completion state of a task
    Toggle {
        /// Task ID
        id: i64,
    },
    /// Rename a task
    Rename {
        /// Task ID
        id: i64,
        /// New name
        name: String,
    },
    /// Delete a task
    Rm {
        /// Task ID
        id: i64,
    },
    /// Light/dark display preference
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommands>,
    },
}

#[derive(Subcommand)]
enum ThemeCommands {
    /// Show the current theme
    Show {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Switch to dark mode
    Dark,
    /// Switch to light mode
    Light,
    /// Switch between light and dark
    Toggle,
}

/// Parse arguments, run one command against the store and close it.
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // Show help when no command provided
        let _ = Cli::parse_from(["tasklist", "--help"]);
        return Ok(());
    };

    let db_path = cli.db.unwrap_or_else(get_db_path);
    let db = SqliteDatabase::open(&db_path).await?;
    let state = AppState::new(db, ChangeNotifier::new());

    let result = dispatch(&state, command).await;
    state.shutdown().await;

    println!("{}", result?);
    Ok(())
}

async fn dispatch(state: &AppState<SqliteDatabase>, command: Commands) -> CliResult<String> {
    match command {
        Commands::Add { name } => commands::task::add_task(state, &name).await,
        Commands::List { format } => commands::task::list_tasks(state, &format).await,
        Commands::Done { id } => commands::task::complete_task(state, id, true).await,
        Commands::Undone { id } => commands::task::complete_task(state, id, false).await,
        Commands::Toggle { id } => commands::task::toggle_task(state, id).await,
        Commands::Rename { id, name } => commands::task::rename_task(state, id, &name).await,
        Commands::Rm { id } => commands::task::delete_task(state, id).await,
        Commands::Theme { command } => match command {
            None => commands::theme::show_theme(state, "table").await,
            Some(ThemeCommands::Show { format }) => {
                commands::theme::show_theme(state, &format).await
            }
            Some(ThemeCommands::Dark) => commands::theme::set_theme(state, true).await,
            Some(ThemeCommands::Light) => commands::theme::set_theme(state, false).await,
            Some(ThemeCommands::Toggle) => commands::theme::toggle_theme(state).await,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_add() {
        let cli = Cli::try_parse_from(["tasklist", "add", "Buy milk"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Add { name }) if name == "Buy milk"));
    }

    #[test]
    fn test_cli_db_flag_is_global() {
        let cli = Cli::try_parse_from(["tasklist", "list", "--db", "/tmp/x.db"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.db")));
    }

    #[test]
    fn test_cli_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["tasklist", "done", "abc"]).is_err());
    }

    #[test]
    fn test_cli_theme_subcommand_optional() {
        let cli = Cli::try_parse_from(["tasklist", "theme"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Theme { command: None })));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_dispatch_round_trip() {
        let db = SqliteDatabase::in_memory().await.unwrap();
        let state = AppState::new(db, ChangeNotifier::new());

        dispatch(
            &state,
            Commands::Add {
                name: "Buy milk".to_string(),
            },
        )
        .await
        .unwrap();
        dispatch(&state, Commands::Done { id: 1 }).await.unwrap();

        let output = dispatch(
            &state,
            Commands::List {
                format: "json".to_string(),
            },
        )
        .await
        .unwrap();
        assert!(output.contains("\"completed\": true"));
    }
}
