//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment: programmatic defaults,
//! project-local YAML files, then environment variable overrides,
//! validated into type-safe config structs.

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
