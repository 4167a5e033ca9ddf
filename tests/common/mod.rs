//! Common test utilities for integration tests
//!
//! Provides shared fixtures and test doubles used across multiple
//! integration test files.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use chrono::Utc;
use latchkey::adapters::cache::InMemoryCache;
use latchkey::adapters::sqlite::{create_migrated_test_pool, SqliteCredentialStore};
use latchkey::domain::errors::{DomainError, DomainResult};
use latchkey::domain::models::{Credential, CredentialRecord, InsertOutcome};
use latchkey::domain::ports::CredentialStore;
use latchkey::services::CredentialCoordinator;

/// Initializes a tracing subscriber for test output.
///
/// Call this at the beginning of tests whose diagnostics are worth seeing
/// under `--nocapture`; repeated calls are no-ops.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Build a coordinator over an in-memory migrated database and a fresh cache.
#[allow(dead_code)]
pub async fn sqlite_coordinator() -> CredentialCoordinator<SqliteCredentialStore, InMemoryCache> {
    let pool = create_migrated_test_pool()
        .await
        .expect("failed to create test database");
    let store = Arc::new(SqliteCredentialStore::new(pool));
    let cache = Arc::new(InMemoryCache::new());
    CredentialCoordinator::new(store, cache)
}

/// Build a coordinator backed by a [`ScriptedStore`] double.
#[allow(dead_code)]
pub fn scripted_coordinator() -> (
    Arc<ScriptedStore>,
    CredentialCoordinator<ScriptedStore, InMemoryCache>,
) {
    let store = Arc::new(ScriptedStore::default());
    let cache = Arc::new(InMemoryCache::new());
    let coordinator = CredentialCoordinator::new(Arc::clone(&store), cache);
    (store, coordinator)
}

// ========================
// Test Doubles
// ========================

/// In-memory credential store with read counters and fault injection.
///
/// Honors the durable store contract: unique usernames, monotonically
/// increasing ids, insertion-ordered listing. Tests can poison reads for
/// a single username or hide rows from lookup to replay interleavings a
/// real database will not produce on demand.
#[derive(Default)]
pub struct ScriptedStore {
    rows: StdMutex<HashMap<String, CredentialRecord>>,
    next_id: AtomicI64,
    reads: AtomicUsize,
    poisoned: StdMutex<Option<String>>,
    panicking: StdMutex<Option<String>>,
    lookup_blind: AtomicBool,
}

#[allow(dead_code)]
impl ScriptedStore {
    /// Make every read touching `username` fail with a durable store error.
    pub fn poison_reads(&self, username: &str) {
        *self.poisoned.lock().expect("poisoned lock") = Some(username.to_string());
    }

    /// Make every read touching `username` panic outright, simulating a
    /// collaborator bug rather than a reported error.
    pub fn panic_on_read(&self, username: &str) {
        *self.panicking.lock().expect("panicking lock") = Some(username.to_string());
    }

    /// When set, username lookups miss even for persisted rows, simulating
    /// a row committed by a concurrent writer after the lookup ran.
    pub fn hide_rows_from_lookup(&self, hidden: bool) {
        self.lookup_blind.store(hidden, Ordering::SeqCst);
    }

    /// Number of read operations served so far (matching reads included).
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn check_poison(&self, username: &str) -> DomainResult<()> {
        // Release the guard before panicking so only this task dies;
        // a poisoned mutex would take the rest of the batch with it.
        let panic_target = self.panicking.lock().expect("panicking lock").clone();
        if panic_target.as_deref() == Some(username) {
            panic!("injected panic for '{username}'");
        }

        let poisoned = self.poisoned.lock().expect("poisoned lock");
        match poisoned.as_deref() {
            Some(target) if target == username => Err(DomainError::DurableStore(format!(
                "injected read failure for '{username}'"
            ))),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl CredentialStore for ScriptedStore {
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<CredentialRecord>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check_poison(username)?;
        if self.lookup_blind.load(Ordering::SeqCst) {
            return Ok(None);
        }
        let rows = self.rows.lock().expect("rows lock");
        Ok(rows.get(username).cloned())
    }

    async fn find_matching(&self, credential: &Credential) -> DomainResult<Option<CredentialRecord>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check_poison(&credential.username)?;
        let rows = self.rows.lock().expect("rows lock");
        Ok(rows
            .get(&credential.username)
            .filter(|record| record.secret == credential.secret)
            .cloned())
    }

    async fn insert_if_absent(&self, credential: &Credential) -> DomainResult<InsertOutcome> {
        let mut rows = self.rows.lock().expect("rows lock");
        if rows.contains_key(&credential.username) {
            return Ok(InsertOutcome::AlreadyExists);
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        rows.insert(
            credential.username.clone(),
            CredentialRecord {
                id,
                username: credential.username.clone(),
                secret: credential.secret.clone(),
                created_at: Utc::now(),
            },
        );
        Ok(InsertOutcome::Inserted)
    }

    async fn list(&self, limit: usize) -> DomainResult<Vec<CredentialRecord>> {
        let rows = self.rows.lock().expect("rows lock");
        let mut records: Vec<_> = rows.values().cloned().collect();
        records.sort_by_key(|record| record.id);
        records.truncate(limit);
        Ok(records)
    }

    async fn truncate_all(&self) -> DomainResult<()> {
        self.rows.lock().expect("rows lock").clear();
        self.next_id.store(0, Ordering::SeqCst);
        Ok(())
    }
}
