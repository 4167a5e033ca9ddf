//! Domain errors for the latchkey credential service.

use thiserror::Error;

/// Domain-level errors surfaced by the credential core.
///
/// `InvalidCredentials` and `UserNotFound` are kept distinct even though the
/// login transport historically presents both as a single unauthorized
/// response; the distinction matters for logs and for the batch verifier's
/// failure-versus-error split.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Connectivity or constraint failure from the system of record.
    #[error("durable store error: {0}")]
    DurableStore(String),

    /// The cached secret did not match the supplied one.
    #[error("invalid credentials for '{0}'")]
    InvalidCredentials(String),

    /// No matching username/secret pair once the cache missed.
    #[error("user not found: '{0}'")]
    UserNotFound(String),

    /// Batch verification found no credentials to check.
    #[error("no users found in the durable store")]
    NoUsersFound,

    /// Runtime plumbing failure (task scheduling, semaphore teardown).
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// True for authentication rejections, false for infrastructure faults.
    ///
    /// The batch verifier uses this to report a rejected check as `Failure`
    /// rather than `Error`.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidCredentials(_) | DomainError::UserNotFound(_)
        )
    }
}

/// Result alias used throughout the domain and service layers.
pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::DurableStore(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_vs_faults() {
        assert!(DomainError::InvalidCredentials("alice".into()).is_rejection());
        assert!(DomainError::UserNotFound("bob".into()).is_rejection());
        assert!(!DomainError::DurableStore("connection refused".into()).is_rejection());
        assert!(!DomainError::NoUsersFound.is_rejection());
    }

    #[test]
    fn test_display_carries_username() {
        let err = DomainError::InvalidCredentials("alice".into());
        assert_eq!(err.to_string(), "invalid credentials for 'alice'");
    }
}
