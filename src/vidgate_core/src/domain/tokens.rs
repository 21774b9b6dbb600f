use serde::{Deserialize, Serialize};

use super::user::UserId;

/// Short-lived stateless credential proving identity for a request window.
///
/// Never persisted; validity is determined purely by signature and expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Longer-lived credential used solely to obtain a new token pair.
///
/// Mirrored on `UserIdentity::current_refresh_token` so it can be revoked
/// (logout, rotation) independent of its own expiry. Rotation relies on
/// exact string equality against the persisted slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefreshToken(String);

impl RefreshToken {
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An access/refresh pair minted together by a login or refresh operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access: AccessToken,
    pub refresh: RefreshToken,
}

/// The decoded, validated contents of a verified token.
///
/// A fixed structure with required fields checked at decode time; claim
/// payloads are never read optimistically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenClaims {
    pub user_id: UserId,
    /// Expiry as a unix timestamp in seconds.
    pub expires_at: i64,
}
