//! Latchkey - cached credential lookup service
//!
//! Latchkey fronts a durable SQLite credential store with an in-memory
//! cache and keeps the two coherent: cache-aside reads, write-through
//! registration, independent per-tier clears, and a concurrent batch
//! verifier that measures per-check authentication latency.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Credential models, outcomes, and port traits
//! - **Adapters** (`adapters`): SQLite store and moka cache implementations
//! - **Service Layer** (`services`): The coordinator and the batch verifier
//! - **Infrastructure Layer** (`infrastructure`): Configuration loading
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use latchkey::adapters::cache::InMemoryCache;
//! use latchkey::adapters::sqlite::{initialize_database, SqliteCredentialStore};
//! use latchkey::domain::models::Credential;
//! use latchkey::services::CredentialCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = initialize_database("sqlite:.latchkey/latchkey.db", None).await?;
//!     let store = Arc::new(SqliteCredentialStore::new(pool));
//!     let cache = Arc::new(InMemoryCache::new());
//!     let coordinator = CredentialCoordinator::new(store, cache);
//!
//!     coordinator.register(&Credential::new("alice", "wonderland")).await?;
//!     coordinator.authenticate(&Credential::new("alice", "wonderland")).await?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    AuthOutcome, AuthPath, CacheConfig, CheckResult, CheckStatus, Config, Credential,
    CredentialRecord, DatabaseConfig, InsertOutcome, LoadReport, LoggingConfig,
    RegistrationOutcome, VerificationReport, VerifierConfig,
};
pub use domain::ports::{CredentialCache, CredentialStore};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{BatchVerifier, CredentialCoordinator};
