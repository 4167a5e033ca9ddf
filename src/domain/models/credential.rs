//! Credential domain model.
//!
//! A credential is an opaque username/secret pair. Usernames are
//! case-sensitive and unique in the durable store; secrets are stored and
//! compared verbatim, with no hashing. Neither field is validated in the
//! domain: empty strings are legal, and the length bound is the durable
//! store's column width, enforced by the schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A username/secret pair as supplied by a caller or generated for bulk load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Unique, case-sensitive identifier.
    pub username: String,
    /// Plaintext secret, compared verbatim.
    pub secret: String,
}

impl Credential {
    /// Create a credential from owned or borrowed strings.
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }

    /// Deterministic synthetic pair for bulk loading, keyed by index.
    ///
    /// The same index always yields the same pair, so repeated bulk loads
    /// re-insert identical rows (exercising the ignore-if-duplicate path)
    /// rather than fabricating fresh usernames each run.
    pub fn synthetic(index: u64) -> Self {
        Self {
            username: format!("user{index}"),
            secret: format!("secret{index}"),
        }
    }
}

/// A credential as persisted in the durable store.
///
/// `id` comes from the store's integer sequence; it restarts from 1 after a
/// durable full-clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Row id assigned by the durable store's sequence.
    pub id: i64,
    /// Unique, case-sensitive identifier.
    pub username: String,
    /// Plaintext secret as persisted.
    pub secret: String,
    /// Insertion time recorded by the durable store.
    pub created_at: DateTime<Utc>,
}

impl CredentialRecord {
    /// View of the persisted pair without row metadata.
    pub fn credential(&self) -> Credential {
        Credential::new(self.username.clone(), self.secret.clone())
    }
}
