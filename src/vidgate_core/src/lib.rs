pub mod domain;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    login_id::LoginId,
    password::{Password, PasswordHash},
    tokens::{AccessToken, RefreshToken, TokenClaims, TokenPair},
    user::{PublicUser, UserError, UserId, UserIdentity},
    username::Username,
};

pub use ports::{
    identity_store::{IdentityStore, IdentityStoreError},
    services::{PasswordHasher, PasswordHasherError},
    tokens::{TokenAuthority, TokenError},
};

pub use strategies::request_gate::{GateError, RequestGate};
