use vidgate_core::{IdentityStore, IdentityStoreError, UserId};

/// Error types for the logout use case.
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Logout use case - revokes the persisted refresh token.
///
/// Clearing the slot makes every previously issued refresh token fail the
/// rotation match immediately, even if unexpired. Outstanding access
/// tokens stay valid until they expire; that window is a documented
/// limitation of stateless access tokens, not a bug.
pub struct LogoutUseCase<S>
where
    S: IdentityStore,
{
    identity_store: S,
}

impl<S> LogoutUseCase<S>
where
    S: IdentityStore,
{
    pub fn new(identity_store: S) -> Self {
        Self { identity_store }
    }

    /// Execute the logout use case.
    ///
    /// Idempotent: logging out an identity whose slot is already empty, or
    /// that no longer exists, is a no-op success.
    #[tracing::instrument(name = "LogoutUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: UserId) -> Result<(), LogoutError> {
        match self.identity_store.set_refresh_token(user_id, None).await {
            Ok(()) | Err(IdentityStoreError::IdentityNotFound) => Ok(()),
            Err(e) => Err(LogoutError::UnexpectedError(e.to_string())),
        }
    }
}
