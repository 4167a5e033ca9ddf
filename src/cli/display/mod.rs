//! Display helpers for CLI output formatting.
//!
//! Shared primitives for status coloring and table rendering used across
//! command output.

pub mod colors;
pub mod table;

pub use colors::{colorize_auth_path, colorize_status};
pub use table::{list_table, render_list};
