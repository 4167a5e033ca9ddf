//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines async trait interfaces that infrastructure adapters must implement:
//! - `CredentialStore`: durable persistence for credential pairs
//! - `CredentialCache`: volatile username-to-secret lookups
//!
//! These traits define the contracts that allow the domain to be independent
//! of specific infrastructure implementations.

pub mod credential_cache;
pub mod credential_store;

pub use credential_cache::CredentialCache;
pub use credential_store::CredentialStore;
