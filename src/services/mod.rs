pub mod coordinator;
pub mod verifier;

pub use coordinator::CredentialCoordinator;
pub use verifier::BatchVerifier;
