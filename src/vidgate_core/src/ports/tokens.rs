use thiserror::Error;

use crate::domain::{
    tokens::{AccessToken, RefreshToken, TokenClaims},
    user::UserId,
};

/// Why a token failed verification.
///
/// Callers at the HTTP edge collapse these into a single 401, but the
/// distinction is kept for logging and for the session manager's failure
/// model (an expired refresh token ends the session; a rotated-away one
/// trips reuse detection).
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,
    #[error("Token signature mismatch")]
    InvalidSignature,
    #[error("Token expired")]
    Expired,
    #[error("Unexpected token error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for TokenError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Malformed, Self::Malformed) => true,
            (Self::InvalidSignature, Self::InvalidSignature) => true,
            (Self::Expired, Self::Expired) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Mints and verifies both token classes.
///
/// Each class is signed with its own secret and carries its own validity
/// window, so compromise of one class does not forge the other. Issuance
/// has no side effects; persisting the refresh token is the session
/// manager's job.
pub trait TokenAuthority: Send + Sync {
    fn issue_access_token(&self, user_id: UserId) -> Result<AccessToken, TokenError>;

    fn issue_refresh_token(&self, user_id: UserId) -> Result<RefreshToken, TokenError>;

    fn verify_access_token(&self, raw: &str) -> Result<TokenClaims, TokenError>;

    fn verify_refresh_token(&self, raw: &str) -> Result<TokenClaims, TokenError>;
}
