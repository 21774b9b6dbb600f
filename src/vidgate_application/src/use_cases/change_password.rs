use vidgate_core::{IdentityStore, Password, PasswordHasher, UserIdentity};

/// Error types for the change password use case.
#[derive(Debug, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Change password use case - re-verifies the current password before
/// persisting the new hash.
///
/// The refresh-token slot is left untouched; the active session survives
/// a password change.
pub struct ChangePasswordUseCase<S, H>
where
    S: IdentityStore,
    H: PasswordHasher,
{
    identity_store: S,
    password_hasher: H,
}

impl<S, H> ChangePasswordUseCase<S, H>
where
    S: IdentityStore,
    H: PasswordHasher,
{
    pub fn new(identity_store: S, password_hasher: H) -> Self {
        Self {
            identity_store,
            password_hasher,
        }
    }

    #[tracing::instrument(
        name = "ChangePasswordUseCase::execute",
        skip(self, identity, old_password, new_password)
    )]
    pub async fn execute(
        &self,
        identity: &UserIdentity,
        old_password: Password,
        new_password: Password,
    ) -> Result<(), ChangePasswordError> {
        let old_matches = self
            .password_hasher
            .verify_password(&old_password, identity.password_hash())
            .await;

        if !old_matches {
            return Err(ChangePasswordError::InvalidCredentials);
        }

        let new_hash = self
            .password_hasher
            .hash_password(&new_password)
            .await
            .map_err(|e| ChangePasswordError::UnexpectedError(e.to_string()))?;

        self.identity_store
            .set_password_hash(identity.id(), new_hash)
            .await
            .map_err(|e| ChangePasswordError::UnexpectedError(e.to_string()))?;

        Ok(())
    }
}
