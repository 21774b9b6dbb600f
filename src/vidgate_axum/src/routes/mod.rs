//! Axum route handlers for the authentication endpoints.

pub mod change_password;
pub mod current_user;
pub mod login;
pub mod logout;
pub mod refresh_token;
pub mod register;

pub use change_password::change_password;
pub use current_user::current_user;
pub use login::login;
pub use logout::logout;
pub use refresh_token::refresh_token;
pub use register::register;
