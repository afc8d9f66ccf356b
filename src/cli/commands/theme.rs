use serde_json::json;

use crate::app::AppState;
use crate::cli::error::CliResult;
use crate::db::Database;

fn theme_name(is_dark_mode: bool) -> &'static str {
    if is_dark_mode { "dark" } else { "light" }
}

/// Show the current theme. Light unless dark mode was saved.
pub async fn show_theme<D: Database>(state: &AppState<D>, format: &str) -> CliResult<String> {
    let is_dark_mode = state.is_dark_mode().await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(
            &json!({ "is_dark_mode": is_dark_mode }),
        )?),
        _ => Ok(theme_name(is_dark_mode).to_string()),
    }
}

/// Persist an explicit theme choice
pub async fn set_theme<D: Database>(state: &AppState<D>, is_dark_mode: bool) -> CliResult<String> {
    state.set_dark_mode(is_dark_mode).await?;
    Ok(format!("✓ Theme set to {}", theme_name(is_dark_mode)))
}

/// Switch between light and dark
pub async fn toggle_theme<D: Database>(state: &AppState<D>) -> CliResult<String> {
    let is_dark_mode = state.toggle_theme().await?;
    Ok(format!("✓ Theme set to {}", theme_name(is_dark_mode)))
}
