//! In-process credential cache backed by a moka bounded map.
//!
//! Entries never expire on their own; they leave the cache only through
//! `flush_all` or capacity eviction. That matches the coordinator's
//! contract, which treats the cache as an explicit-mutation mirror of the
//! durable store rather than a TTL-driven one.

use async_trait::async_trait;
use moka::future::Cache;

use crate::domain::ports::CredentialCache;

/// Maximum number of cached credential entries, unless configured.
const DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Bounded in-memory username-to-secret cache.
pub struct InMemoryCache {
    entries: Cache<String, String>,
}

impl InMemoryCache {
    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTRIES)
    }

    /// Create a cache bounded to `max_entries` entries.
    pub fn with_capacity(max_entries: u64) -> Self {
        let entries = Cache::builder().max_capacity(max_entries).build();
        Self { entries }
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialCache for InMemoryCache {
    async fn contains(&self, username: &str) -> bool {
        self.entries.contains_key(username)
    }

    async fn get(&self, username: &str) -> Option<String> {
        self.entries.get(username).await
    }

    async fn put(&self, username: &str, secret: &str) {
        self.entries.insert(username.to_string(), secret.to_string()).await;
    }

    async fn flush_all(&self) {
        self.entries.invalidate_all();
    }
}
