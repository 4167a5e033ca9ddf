//! Fast credential cache port.

use async_trait::async_trait;

/// Interface for the volatile key-value tier in front of the store.
///
/// The cache maps usernames to secrets and is best-effort by contract:
/// implementations never fail, they only hit or miss. Coordinator logic
/// trusts whatever the cache returns without consulting the store, so a
/// poisoned entry wins until it is overwritten or flushed.
#[async_trait]
pub trait CredentialCache: Send + Sync {
    /// Whether the cache currently holds an entry for `username`.
    async fn contains(&self, username: &str) -> bool;

    /// Fetch the cached secret for `username`, if present.
    async fn get(&self, username: &str) -> Option<String>;

    /// Insert or overwrite the entry for `username`.
    async fn put(&self, username: &str, secret: &str);

    /// Drop every entry. Always succeeds.
    async fn flush_all(&self);
}
