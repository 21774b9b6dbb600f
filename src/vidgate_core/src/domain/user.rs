use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{
    email::Email,
    password::PasswordHash,
    tokens::RefreshToken,
    username::Username,
};

/// Validation errors raised while parsing user-supplied values into
/// domain types.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Invalid username")]
    InvalidUsername,
    #[error("Password does not meet requirements")]
    InvalidPassword,
    #[error("Username or email must not be empty")]
    EmptyLogin,
    #[error("Invalid user id")]
    InvalidUserId,
}

/// Stable unique identifier of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> Result<Self, UserError> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| UserError::InvalidUserId)
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The authentication-relevant projection of a user record.
///
/// `password_hash` never leaves the process and `current_refresh_token`
/// holds the single refresh token currently considered valid for this
/// identity. It is overwritten on every login/refresh and cleared on
/// logout, so at most one refresh token is live per identity at any time.
#[derive(Debug, Clone)]
pub struct UserIdentity {
    id: UserId,
    username: Username,
    email: Email,
    password_hash: PasswordHash,
    current_refresh_token: Option<RefreshToken>,
}

impl UserIdentity {
    pub fn new(username: Username, email: Email, password_hash: PasswordHash) -> Self {
        Self {
            id: UserId::new(),
            username,
            email,
            password_hash,
            current_refresh_token: None,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn current_refresh_token(&self) -> Option<&RefreshToken> {
        self.current_refresh_token.as_ref()
    }

    pub fn set_refresh_token(&mut self, token: Option<RefreshToken>) {
        self.current_refresh_token = token;
    }

    pub fn set_password_hash(&mut self, hash: PasswordHash) {
        self.password_hash = hash;
    }

    /// The outward-facing projection. The password hash and refresh token
    /// are deliberately absent.
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            username: self.username.as_str().to_owned(),
            email: self.email.as_str().to_owned(),
        }
    }
}

/// Serializable projection of a user record, safe to return to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
}
