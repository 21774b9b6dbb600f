use vidgate_core::{
    IdentityStore, LoginId, Password, PasswordHasher, PublicUser, TokenAuthority, TokenPair,
};

/// Response from the login use case: the public user projection plus the
/// freshly minted token pair.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedSession {
    pub user: PublicUser,
    pub tokens: TokenPair,
}

/// Error types specific to the login use case.
///
/// `IdentityNotFound` and `InvalidCredentials` stay distinct here so they
/// can be logged separately; the HTTP layer collapses them into a single
/// unauthorized response to avoid user enumeration.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Identity not found")]
    IdentityNotFound,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Login use case - verifies credentials and opens a session.
pub struct LoginUseCase<S, H, T>
where
    S: IdentityStore,
    H: PasswordHasher,
    T: TokenAuthority,
{
    identity_store: S,
    password_hasher: H,
    token_authority: T,
}

impl<S, H, T> LoginUseCase<S, H, T>
where
    S: IdentityStore,
    H: PasswordHasher,
    T: TokenAuthority,
{
    pub fn new(identity_store: S, password_hasher: H, token_authority: T) -> Self {
        Self {
            identity_store,
            password_hasher,
            token_authority,
        }
    }

    /// Execute the login use case.
    ///
    /// On success the refresh token has already been persisted onto the
    /// identity record; the caller never receives a refresh token that was
    /// not durably recorded first.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        login: LoginId,
        password: Password,
    ) -> Result<AuthenticatedSession, LoginError> {
        let identity = self
            .identity_store
            .find_by_login(&login)
            .await
            .map_err(|e| LoginError::UnexpectedError(e.to_string()))?
            .ok_or(LoginError::IdentityNotFound)?;

        let password_matches = self
            .password_hasher
            .verify_password(&password, identity.password_hash())
            .await;

        if !password_matches {
            return Err(LoginError::InvalidCredentials);
        }

        let access = self
            .token_authority
            .issue_access_token(identity.id())
            .map_err(|e| LoginError::UnexpectedError(e.to_string()))?;
        let refresh = self
            .token_authority
            .issue_refresh_token(identity.id())
            .map_err(|e| LoginError::UnexpectedError(e.to_string()))?;

        // Persist before handing the pair back.
        self.identity_store
            .set_refresh_token(identity.id(), Some(refresh.clone()))
            .await
            .map_err(|e| LoginError::UnexpectedError(e.to_string()))?;

        Ok(AuthenticatedSession {
            user: identity.to_public(),
            tokens: TokenPair { access, refresh },
        })
    }
}
