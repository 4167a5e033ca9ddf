//! Reports produced by bulk operations.

use serde::{Deserialize, Serialize};

/// Report of a bulk load into the durable store and cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Number of credential pairs written through both tiers.
    pub processed: u64,
}

/// Terminal status of a single credential check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// The supplied pair authenticated.
    Success,
    /// The system answered and rejected the pair.
    Failure,
    /// The check could not complete (store fault, join failure).
    Error,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one credential check inside a batch verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Username the check targeted.
    pub username: String,
    /// Terminal status of the check.
    pub status: CheckStatus,
    /// Diagnostic detail for `Failure` and `Error` statuses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Wall-clock duration of this check in seconds.
    pub elapsed_secs: f64,
}

impl CheckResult {
    pub fn success(username: impl Into<String>, elapsed_secs: f64) -> Self {
        Self {
            username: username.into(),
            status: CheckStatus::Success,
            error: None,
            elapsed_secs,
        }
    }

    pub fn failure(username: impl Into<String>, detail: impl Into<String>, elapsed_secs: f64) -> Self {
        Self {
            username: username.into(),
            status: CheckStatus::Failure,
            error: Some(detail.into()),
            elapsed_secs,
        }
    }

    pub fn error(username: impl Into<String>, detail: impl Into<String>, elapsed_secs: f64) -> Self {
        Self {
            username: username.into(),
            status: CheckStatus::Error,
            error: Some(detail.into()),
            elapsed_secs,
        }
    }
}

/// Aggregate report of a batch verification run.
///
/// `failed` counts everything that is not a success, so
/// `successful + failed == total` always holds. `results` are ordered by
/// completion, not by submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Number of credentials checked.
    pub total: u64,
    /// Checks that authenticated.
    pub successful: u64,
    /// Checks that did not authenticate, for any reason.
    pub failed: u64,
    /// Mean per-check duration in seconds, averaged over all checks.
    pub average_seconds: f64,
    /// Per-check results in completion order.
    pub results: Vec<CheckResult>,
}

impl VerificationReport {
    /// Builds the aggregate from per-check results.
    pub fn from_results(results: Vec<CheckResult>) -> Self {
        let total = results.len() as u64;
        let successful = results
            .iter()
            .filter(|r| r.status == CheckStatus::Success)
            .count() as u64;
        let total_elapsed: f64 = results.iter().map(|r| r.elapsed_secs).sum();
        let average_seconds = if total == 0 {
            0.0
        } else {
            total_elapsed / total as f64
        };
        Self {
            total,
            successful,
            failed: total - successful,
            average_seconds,
            results,
        }
    }

    /// Fraction of checks that succeeded, in `[0.0, 1.0]`.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.successful as f64 / self.total as f64
        }
    }
}
