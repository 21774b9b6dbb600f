use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    login_id::LoginId,
    password::PasswordHash,
    tokens::RefreshToken,
    user::{UserId, UserIdentity},
};

// IdentityStore port trait and errors
#[derive(Debug, Error)]
pub enum IdentityStoreError {
    #[error("Identity already exists")]
    IdentityAlreadyExists,
    #[error("Identity not found")]
    IdentityNotFound,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for IdentityStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::IdentityAlreadyExists, Self::IdentityAlreadyExists) => true,
            (Self::IdentityNotFound, Self::IdentityNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Contract of the external user-record store.
///
/// The backing document store is an external collaborator; the subsystem
/// only needs atomic-enough find/update by id. Lookups return `None`
/// rather than an error on a miss so callers decide how a missing identity
/// surfaces (login collapses it, the gate rejects it).
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn add_identity(&self, identity: UserIdentity) -> Result<(), IdentityStoreError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserIdentity>, IdentityStoreError>;

    /// Matches the value against both the username and the email column.
    async fn find_by_login(
        &self,
        login: &LoginId,
    ) -> Result<Option<UserIdentity>, IdentityStoreError>;

    /// Overwrites the refresh-token slot; `None` clears it (logout).
    async fn set_refresh_token(
        &self,
        id: UserId,
        token: Option<RefreshToken>,
    ) -> Result<(), IdentityStoreError>;

    async fn set_password_hash(
        &self,
        id: UserId,
        hash: PasswordHash,
    ) -> Result<(), IdentityStoreError>;
}
