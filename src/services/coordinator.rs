//! Credential coordinator service.
//!
//! Orchestrates the durable store and the fast cache into one authentication
//! surface: cache-aside reads, write-through registration, and independent
//! per-tier clears. The store is the system of record; the cache is a
//! disposable mirror that the coordinator alone mutates.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    AuthOutcome, AuthPath, Credential, InsertOutcome, LoadReport, RegistrationOutcome,
};
use crate::domain::ports::{CredentialCache, CredentialStore};

pub struct CredentialCoordinator<S: CredentialStore, C: CredentialCache> {
    store: Arc<S>,
    cache: Arc<C>,
}

impl<S: CredentialStore, C: CredentialCache> CredentialCoordinator<S, C> {
    pub fn new(store: Arc<S>, cache: Arc<C>) -> Self {
        Self { store, cache }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn cache(&self) -> &Arc<C> {
        &self.cache
    }

    /// Register a credential, writing through to both tiers.
    ///
    /// The cache is consulted first and trusted outright: a cached username
    /// short-circuits to `AlreadyCached` without touching the store, even
    /// when the entry is stale. A username already persisted (but not
    /// cached) has its stored secret backfilled into the cache, not the
    /// caller's. Only a genuinely new username reaches the insert.
    ///
    /// Performs at most one lookup and one mutation per tier. A concurrent
    /// registration of the same username is arbitrated by the store's
    /// uniqueness constraint, never by the coordinator.
    pub async fn register(&self, credential: &Credential) -> DomainResult<RegistrationOutcome> {
        if self.cache.contains(&credential.username).await {
            debug!(username = %credential.username, "registration short-circuited by cache");
            return Ok(RegistrationOutcome::AlreadyCached);
        }

        if let Some(record) = self.store.find_by_username(&credential.username).await? {
            // Mirror what is actually persisted, not what the caller sent.
            self.cache.put(&record.username, &record.secret).await;
            debug!(username = %credential.username, "registration found persisted credential");
            return Ok(RegistrationOutcome::AlreadyPersisted);
        }

        match self.store.insert_if_absent(credential).await? {
            InsertOutcome::Inserted => {
                self.cache.put(&credential.username, &credential.secret).await;
                info!(username = %credential.username, "credential registered");
                Ok(RegistrationOutcome::Created)
            }
            InsertOutcome::AlreadyExists => {
                // Lost the insert race. The winner's secret is unknown
                // without a second lookup, so the cache is left alone.
                debug!(username = %credential.username, "registration lost insert race");
                Ok(RegistrationOutcome::AlreadyPersisted)
            }
        }
    }

    /// Authenticate a credential, cache tier first.
    ///
    /// A cache entry is authoritative when present: a secret mismatch
    /// against the cache fails with `InvalidCredentials` and the store is
    /// never consulted. On a cache miss the pair is matched against the
    /// store; a hit backfills the cache, a miss fails with `UserNotFound`
    /// whether the username is unknown or the secret merely wrong.
    pub async fn authenticate(&self, credential: &Credential) -> DomainResult<AuthOutcome> {
        // One read decides the cache tier; a contains-then-get pair could
        // straddle an eviction and misreport the miss as a mismatch.
        if let Some(cached) = self.cache.get(&credential.username).await {
            return if cached == credential.secret {
                debug!(username = %credential.username, "authenticated via cache");
                Ok(AuthOutcome { via: AuthPath::Cache })
            } else {
                Err(DomainError::InvalidCredentials(credential.username.clone()))
            };
        }

        match self.store.find_matching(credential).await? {
            Some(record) => {
                self.cache.put(&record.username, &record.secret).await;
                debug!(username = %credential.username, "authenticated via store, cache backfilled");
                Ok(AuthOutcome { via: AuthPath::Store })
            }
            None => Err(DomainError::UserNotFound(credential.username.clone())),
        }
    }

    /// Insert `count` synthetic credential pairs through both tiers.
    ///
    /// Duplicates in the store are ignored, but the cache is overwritten
    /// unconditionally, so a colliding username ends up cached with the
    /// synthetic secret even when the persisted one differs. A single
    /// store failure aborts the whole batch.
    pub async fn bulk_load(&self, count: u64) -> DomainResult<LoadReport> {
        for index in 0..count {
            let credential = Credential::synthetic(index);
            if self.store.insert_if_absent(&credential).await? == InsertOutcome::AlreadyExists {
                warn!(username = %credential.username, "bulk load collided with existing credential");
            }
            self.cache.put(&credential.username, &credential.secret).await;
        }

        info!(count, "bulk load complete");
        Ok(LoadReport { processed: count })
    }

    /// Truncate the durable store, leaving the cache untouched.
    ///
    /// Rolls back on failure; a partial truncate is never visible.
    pub async fn clear_durable(&self) -> DomainResult<()> {
        self.store.truncate_all().await?;
        info!("durable store cleared");
        Ok(())
    }

    /// Empty the cache, leaving the durable store untouched. Infallible.
    pub async fn clear_cache(&self) {
        self.cache.flush_all().await;
        info!("cache flushed");
    }
}
