use async_trait::async_trait;
use thiserror::Error;

use crate::{domain::user::UserIdentity, ports::tokens::TokenError};

#[derive(Debug, Error)]
pub enum GateError {
    #[error("Missing credential")]
    MissingCredential,
    #[error("Invalid token: {0}")]
    InvalidToken(#[from] TokenError),
    #[error("Unknown identity")]
    UnknownIdentity,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Per-request enforcement point for protected routes.
///
/// Implementations extract a bearer credential from the request parts,
/// verify it, and re-fetch the identity from the store rather than
/// trusting the claims, so a deleted account is rejected even while its
/// signed token is still within its validity window.
///
/// The gate never mutates tokens or the store. The distinct `GateError`
/// kinds exist for observability; the HTTP layer collapses all of them
/// into one unauthorized response.
///
/// # Implementation Note
///
/// The gate receives request parts (headers, method, URI) rather than the
/// full request so it can run from an extractor without touching the body.
#[async_trait]
pub trait RequestGate: Clone + Send + Sync + 'static {
    /// The request parts type this gate operates on, typically
    /// `http::request::Parts`.
    type RequestParts;

    /// Extract the credential, verify it, and load the current identity.
    async fn authorize(&self, parts: &Self::RequestParts) -> Result<UserIdentity, GateError>;
}
