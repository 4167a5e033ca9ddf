pub mod config;
pub mod credential;
pub mod outcome;
pub mod report;

pub use config::{CacheConfig, Config, DatabaseConfig, LoggingConfig, VerifierConfig};
pub use credential::{Credential, CredentialRecord};
pub use outcome::{AuthOutcome, AuthPath, InsertOutcome, RegistrationOutcome};
pub use report::{CheckResult, CheckStatus, LoadReport, VerificationReport};
