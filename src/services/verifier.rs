//! Concurrent batch verification of stored credentials.
//!
//! Reads persisted pairs back out of the durable store and replays each
//! one through the coordinator's authentication path, fanning the checks
//! out across the runtime and timing every check individually. Used to
//! measure cache-versus-store latency under load.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{CheckResult, Credential, VerificationReport, VerifierConfig};
use crate::domain::ports::{CredentialCache, CredentialStore};
use crate::services::coordinator::CredentialCoordinator;

pub struct BatchVerifier<S, C>
where
    S: CredentialStore + 'static,
    C: CredentialCache + 'static,
{
    coordinator: Arc<CredentialCoordinator<S, C>>,
    config: VerifierConfig,
}

impl<S, C> BatchVerifier<S, C>
where
    S: CredentialStore + 'static,
    C: CredentialCache + 'static,
{
    pub fn new(coordinator: Arc<CredentialCoordinator<S, C>>) -> Self {
        Self {
            coordinator,
            config: VerifierConfig::default(),
        }
    }

    pub fn with_config(mut self, config: VerifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Verify up to `limit` stored credentials concurrently.
    ///
    /// Every check runs to completion; a failing or erroring check is
    /// captured in its own result entry and never aborts the batch. The
    /// report's `results` are ordered by completion, which is
    /// nondeterministic across runs. Fails with `NoUsersFound` when the
    /// store has nothing to verify.
    pub async fn verify_batch(&self, limit: usize) -> DomainResult<VerificationReport> {
        let records = self.coordinator.store().list(limit).await?;
        if records.is_empty() {
            return Err(DomainError::NoUsersFound);
        }

        let total = records.len();
        info!(total, max_concurrency = self.config.max_concurrency, "verification batch dispatched");

        // A zero bound would park every check forever.
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrency.max(1)));
        let mut checks: JoinSet<CheckResult> = JoinSet::new();
        let mut in_flight: HashMap<tokio::task::Id, String> = HashMap::with_capacity(total);

        for record in records {
            let credential = record.credential();
            let username = credential.username.clone();
            let coordinator = Arc::clone(&self.coordinator);
            let semaphore = Arc::clone(&semaphore);
            let handle = checks.spawn(check_credential(coordinator, credential, semaphore));
            in_flight.insert(handle.id(), username);
        }

        let mut results = Vec::with_capacity(total);
        while let Some(joined) = checks.join_next_with_id().await {
            match joined {
                Ok((id, result)) => {
                    in_flight.remove(&id);
                    results.push(result);
                }
                Err(e) => {
                    // A check whose task dies (a panic inside a collaborator)
                    // still accounts for its record as an error entry, so the
                    // report always covers every dispatched check.
                    let username = in_flight.remove(&e.id()).unwrap_or_default();
                    warn!(error = %e, username = %username, "verification check failed to join");
                    results.push(CheckResult::error(username, e.to_string(), 0.0));
                }
            }
        }

        let report = VerificationReport::from_results(results);
        info!(
            successful = report.successful,
            failed = report.failed,
            "verification batch complete"
        );
        Ok(report)
    }
}

/// Run one authentication check and fold its outcome into a result entry.
async fn check_credential<S, C>(
    coordinator: Arc<CredentialCoordinator<S, C>>,
    credential: Credential,
    semaphore: Arc<Semaphore>,
) -> CheckResult
where
    S: CredentialStore + 'static,
    C: CredentialCache + 'static,
{
    let _permit = match semaphore.acquire_owned().await {
        Ok(permit) => permit,
        Err(e) => {
            return CheckResult::error(
                credential.username,
                DomainError::Internal(format!("verifier semaphore closed: {e}")).to_string(),
                0.0,
            );
        }
    };

    let start = Instant::now();
    match coordinator.authenticate(&credential).await {
        Ok(_) => CheckResult::success(credential.username, start.elapsed().as_secs_f64()),
        Err(e) if e.is_rejection() => {
            CheckResult::failure(credential.username, e.to_string(), start.elapsed().as_secs_f64())
        }
        Err(e) => CheckResult::error(credential.username, e.to_string(), start.elapsed().as_secs_f64()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cache::InMemoryCache;
    use crate::adapters::sqlite::{create_migrated_test_pool, SqliteCredentialStore};
    use crate::domain::models::CheckStatus;

    async fn setup_verifier() -> BatchVerifier<SqliteCredentialStore, InMemoryCache> {
        let pool = create_migrated_test_pool().await.unwrap();
        let store = Arc::new(SqliteCredentialStore::new(pool));
        let cache = Arc::new(InMemoryCache::new());
        let coordinator = Arc::new(CredentialCoordinator::new(store, cache));
        BatchVerifier::new(coordinator)
    }

    #[tokio::test]
    async fn test_empty_store_reports_no_users() {
        let verifier = setup_verifier().await;
        let err = verifier.verify_batch(100).await.unwrap_err();
        assert!(matches!(err, DomainError::NoUsersFound));
    }

    #[tokio::test]
    async fn test_all_valid_pairs_succeed() {
        let verifier = setup_verifier().await;
        verifier.coordinator.bulk_load(8).await.unwrap();

        let report = verifier.verify_batch(8).await.unwrap();
        assert_eq!(report.total, 8);
        assert_eq!(report.successful, 8);
        assert_eq!(report.failed, 0);
        assert!(report.average_seconds >= 0.0);
    }

    #[tokio::test]
    async fn test_limit_bounds_the_batch() {
        let verifier = setup_verifier().await;
        verifier.coordinator.bulk_load(10).await.unwrap();

        let report = verifier.verify_batch(4).await.unwrap();
        assert_eq!(report.total, 4);
    }

    #[tokio::test]
    async fn test_results_are_a_set_not_a_sequence() {
        let verifier = setup_verifier().await;
        verifier.coordinator.bulk_load(6).await.unwrap();

        let report = verifier.verify_batch(6).await.unwrap();

        // Completion order is nondeterministic; only membership holds.
        let mut usernames: Vec<_> = report.results.iter().map(|r| r.username.clone()).collect();
        usernames.sort();
        let expected: Vec<_> = (0..6).map(|i| format!("user{i}")).collect();
        assert_eq!(usernames, expected);
    }

    #[tokio::test]
    async fn test_tampered_cache_entry_degrades_one_check() {
        let verifier = setup_verifier().await;
        verifier.coordinator.bulk_load(4).await.unwrap();
        verifier.coordinator.cache().put("user2", "tampered").await;

        let report = verifier.verify_batch(4).await.unwrap();
        assert_eq!(report.total, 4);
        assert_eq!(report.successful, 3);
        assert_eq!(report.failed, 1);

        let degraded = report.results.iter().find(|r| r.username == "user2").unwrap();
        assert_eq!(degraded.status, CheckStatus::Failure);
        assert!(degraded.error.is_some());
    }

    #[tokio::test]
    async fn test_single_permit_still_completes_batch() {
        let verifier = setup_verifier().await;
        verifier.coordinator.bulk_load(5).await.unwrap();

        let serialized = verifier.with_config(VerifierConfig { max_concurrency: 1 });
        let report = serialized.verify_batch(5).await.unwrap();
        assert_eq!(report.successful, 5);
    }

    #[tokio::test]
    async fn test_zero_concurrency_is_clamped() {
        let verifier = setup_verifier().await;
        verifier.coordinator.bulk_load(2).await.unwrap();

        let clamped = verifier.with_config(VerifierConfig { max_concurrency: 0 });
        let report = clamped.verify_batch(2).await.unwrap();
        assert_eq!(report.total, 2);
    }
}
