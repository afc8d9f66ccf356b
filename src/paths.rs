//! Path resolution for tasklist directories.
//!
//! Provides XDG-compliant path resolution for the database file.

use std::env;
use std::path::{Path, PathBuf};

/// Directory name under the platform data directory.
pub const APP_DIR_NAME: &str = "tasklist";

/// Fixed database filename.
pub const DB_FILE_NAME: &str = "tasklist.db";

/// Get XDG-compliant data directory for tasklist.
///
/// Resolves `$XDG_DATA_HOME/tasklist`, then `$HOME/.local/share/tasklist`,
/// and finally `./.tasklist` when neither variable is set.
pub fn get_data_dir() -> PathBuf {
    resolve_data_dir(
        env::var_os("XDG_DATA_HOME").map(PathBuf::from).as_deref(),
        env::var_os("HOME").map(PathBuf::from).as_deref(),
    )
}

/// Get database file path (data_dir/tasklist.db).
pub fn get_db_path() -> PathBuf {
    get_data_dir().join(DB_FILE_NAME)
}

fn resolve_data_dir(xdg_data_home: Option<&Path>, home: Option<&Path>) -> PathBuf {
    match (xdg_data_home, home) {
        (Some(data_home), _) if !data_home.as_os_str().is_empty() => data_home.join(APP_DIR_NAME),
        (_, Some(home)) if !home.as_os_str().is_empty() => {
            home.join(".local/share").join(APP_DIR_NAME)
        }
        _ => PathBuf::from(format!(".{}", APP_DIR_NAME)),
    }
}
