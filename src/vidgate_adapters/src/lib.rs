pub mod auth_validation;
pub mod config;
pub mod password;
pub mod persistence;
pub mod tokens;

pub use auth_validation::{
    cookies::{create_auth_cookie, create_removal_cookie},
    jwt_request_gate::JwtRequestGate,
};
pub use config::{AuthConfig, CookieNames};
pub use password::Argon2PasswordHasher;
pub use persistence::InMemoryIdentityStore;
pub use tokens::{JwtTokenAuthority, TokenClassConfig};
