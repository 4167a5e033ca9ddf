//! CLI command implementations.

pub mod bench;
pub mod clear;
pub mod init;
pub mod load;
pub mod login;
pub mod register;
pub mod verify;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::adapters::cache::InMemoryCache;
use crate::adapters::sqlite::{database_url, initialize_database, PoolConfig, SqliteCredentialStore};
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::services::CredentialCoordinator;

/// Coordinator wired to the configured SQLite store and in-process cache.
pub type Coordinator = CredentialCoordinator<SqliteCredentialStore, InMemoryCache>;

/// Shared dependencies built once per command invocation.
///
/// The cache starts empty on every invocation; only the durable store
/// carries state across processes.
pub struct CommandContext {
    pub config: Config,
    pub coordinator: Arc<Coordinator>,
}

pub async fn load_context() -> Result<CommandContext> {
    let config = ConfigLoader::load()?;

    let url = database_url(&config.database.path);
    let pool = initialize_database(&url, Some(PoolConfig::from(&config.database)))
        .await
        .with_context(|| format!("Failed to open database at {}", config.database.path))?;

    let store = Arc::new(SqliteCredentialStore::new(pool));
    let cache = Arc::new(InMemoryCache::with_capacity(config.cache.max_entries));
    let coordinator = Arc::new(CredentialCoordinator::new(store, cache));

    Ok(CommandContext { config, coordinator })
}
