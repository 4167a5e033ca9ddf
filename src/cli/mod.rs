//! Command-line interface: argument parsing, command execution, output.

pub mod commands;
pub mod display;
pub mod output;
pub mod progress;
pub mod types;

pub use types::{Cli, ClearCommands, Commands};

use console::style;

/// Print a command failure and exit nonzero.
///
/// Rejections and faults alike land here; the distinction lives in the
/// error text, not the exit code.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("{} {err:#}", style("error:").red().bold());
    }
    std::process::exit(1);
}
