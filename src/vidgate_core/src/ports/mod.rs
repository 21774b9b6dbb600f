pub mod identity_store;
pub mod services;
pub mod tokens;
