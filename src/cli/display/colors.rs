//! Status and tier color mapping for CLI output.
//!
//! Styling is dropped automatically when stdout is not a terminal.

use console::{style, StyledObject};

/// Returns a styled string for a check or operation status.
///
/// Color scheme:
/// - Green:  success, created, authenticated, cleared
/// - Yellow: failure, already_cached, already_persisted
/// - Red:    error
pub fn colorize_status(status: &str) -> StyledObject<&str> {
    match status {
        "success" | "created" | "authenticated" | "cleared" => style(status).green().bold(),
        "failure" | "already_cached" | "already_persisted" => style(status).yellow(),
        "error" => style(status).red().bold(),
        _ => style(status),
    }
}

/// Returns a styled string for the tier that answered an authentication.
///
/// Cache = cyan (fast path), store = blue (durable path).
pub fn colorize_auth_path(path: &str) -> StyledObject<&str> {
    match path {
        "cache" => style(path).cyan(),
        "store" => style(path).blue(),
        _ => style(path),
    }
}
