use async_trait::async_trait;
use thiserror::Error;

use crate::domain::password::{Password, PasswordHash};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
}

/// Password hashing and verification port.
///
/// Hashing is CPU-bound, so the trait is async and implementations are
/// expected to move the work off the async runtime.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &Password)
    -> Result<PasswordHash, PasswordHasherError>;

    /// Fails closed: a malformed stored hash or any internal error is a
    /// verification failure, never a success.
    async fn verify_password(&self, password: &Password, stored_hash: &PasswordHash) -> bool;
}
