//! Durable credential store port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Credential, CredentialRecord, InsertOutcome};

/// Repository interface for durable credential persistence.
///
/// The store is the source of truth. Every fallible operation surfaces
/// backend failures as `DomainError::DurableStore`; absence is modelled
/// with `Option`, never with an error.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up a record by username alone.
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<CredentialRecord>>;

    /// Look up a record matching both username and secret.
    ///
    /// A username that exists with a different secret yields `None`, the
    /// same as an unknown username. Callers that need to tell the two
    /// apart follow up with [`find_by_username`](Self::find_by_username).
    async fn find_matching(&self, credential: &Credential) -> DomainResult<Option<CredentialRecord>>;

    /// Insert a credential unless the username is already taken.
    ///
    /// Uniqueness is enforced by the store itself, so two concurrent
    /// inserts of the same username resolve to exactly one `Inserted`.
    async fn insert_if_absent(&self, credential: &Credential) -> DomainResult<InsertOutcome>;

    /// List up to `limit` records in insertion order.
    async fn list(&self, limit: usize) -> DomainResult<Vec<CredentialRecord>>;

    /// Delete every stored credential and reset identity numbering.
    async fn truncate_all(&self) -> DomainResult<()>;
}
