//! Tagged outcome types for coordinator and store operations.
//!
//! Every operation reports its outcome as a sum type rather than a loosely
//! shaped message, so callers can handle each case exhaustively.

use serde::{Deserialize, Serialize};

/// Outcome of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationOutcome {
    /// Inserted into the durable store and mirrored into the cache.
    Created,
    /// The cache already held the username; the durable store was not
    /// consulted. The cache trusts itself, so a stale entry masks
    /// re-registration.
    AlreadyCached,
    /// The durable store already held the username; its stored secret (not
    /// the caller's) was backfilled into the cache.
    AlreadyPersisted,
}

impl RegistrationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::AlreadyCached => "already_cached",
            Self::AlreadyPersisted => "already_persisted",
        }
    }
}

impl std::fmt::Display for RegistrationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which tier resolved an authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthPath {
    /// Resolved against the cache's mirror entry.
    Cache,
    /// Resolved against the durable store (cache missed, entry backfilled).
    Store,
}

impl AuthPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::Store => "store",
        }
    }
}

impl std::fmt::Display for AuthPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful authentication, tagged with the tier that resolved it.
///
/// The tag doubles as the instrumentation hook for cache-coherency tests:
/// a repeat authentication for the same username must flip from `Store` to
/// `Cache`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthOutcome {
    /// Tier that answered.
    pub via: AuthPath,
}

/// Outcome of a uniqueness-respecting insert into the durable store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertOutcome {
    /// A new row was written.
    Inserted,
    /// A row with this username already existed; nothing was written.
    AlreadyExists,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels() {
        assert_eq!(RegistrationOutcome::Created.to_string(), "created");
        assert_eq!(
            RegistrationOutcome::AlreadyPersisted.to_string(),
            "already_persisted"
        );
        assert_eq!(AuthPath::Cache.to_string(), "cache");
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&RegistrationOutcome::AlreadyCached).unwrap();
        assert_eq!(json, "\"already_cached\"");

        let outcome = AuthOutcome {
            via: AuthPath::Store,
        };
        assert_eq!(serde_json::to_string(&outcome).unwrap(), "{\"via\":\"store\"}");
    }
}
