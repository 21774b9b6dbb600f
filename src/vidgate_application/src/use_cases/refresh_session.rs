use vidgate_core::{IdentityStore, RefreshToken, TokenAuthority, TokenError, TokenPair};

/// Error types specific to the refresh use case.
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    /// Bad signature, malformed payload, or expired: the session is over
    /// and the client must log in again.
    #[error("Invalid refresh token: {0}")]
    InvalidToken(#[from] TokenError),
    /// The token verified but the identity it names no longer exists.
    #[error("Identity not found")]
    IdentityNotFound,
    /// Valid signature but the token is not the one persisted on the
    /// identity: a previously rotated-away token is being replayed.
    #[error("Refresh token reuse detected")]
    TokenReuseDetected,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Refresh use case - rotates the token pair.
///
/// Every successful refresh invalidates the token that produced it: the
/// presented token must exact-match the persisted slot, and the slot is
/// overwritten with the replacement before the new pair is returned.
pub struct RefreshSessionUseCase<S, T>
where
    S: IdentityStore,
    T: TokenAuthority,
{
    identity_store: S,
    token_authority: T,
}

impl<S, T> RefreshSessionUseCase<S, T>
where
    S: IdentityStore,
    T: TokenAuthority,
{
    pub fn new(identity_store: S, token_authority: T) -> Self {
        Self {
            identity_store,
            token_authority,
        }
    }

    /// Execute the refresh use case.
    ///
    /// Two concurrent calls presenting the same still-valid token may both
    /// pass the match check; the persisted slot converges to whichever
    /// write lands last and the loser's token trips `TokenReuseDetected`
    /// on its next cycle. The store is the only serialization point.
    #[tracing::instrument(name = "RefreshSessionUseCase::execute", skip_all)]
    pub async fn execute(&self, presented: RefreshToken) -> Result<TokenPair, RefreshError> {
        let claims = self
            .token_authority
            .verify_refresh_token(presented.as_str())?;

        let identity = self
            .identity_store
            .find_by_id(claims.user_id)
            .await
            .map_err(|e| RefreshError::UnexpectedError(e.to_string()))?
            .ok_or(RefreshError::IdentityNotFound)?;

        match identity.current_refresh_token() {
            Some(current) if *current == presented => {}
            _ => return Err(RefreshError::TokenReuseDetected),
        }

        let access = self
            .token_authority
            .issue_access_token(identity.id())
            .map_err(|e| RefreshError::UnexpectedError(e.to_string()))?;
        let refresh = self
            .token_authority
            .issue_refresh_token(identity.id())
            .map_err(|e| RefreshError::UnexpectedError(e.to_string()))?;

        // Rotation: the presented token is dead from this point on.
        self.identity_store
            .set_refresh_token(identity.id(), Some(refresh.clone()))
            .await
            .map_err(|e| RefreshError::UnexpectedError(e.to_string()))?;

        Ok(TokenPair { access, refresh })
    }
}
