pub mod email;
pub mod login_id;
pub mod password;
pub mod tokens;
pub mod user;
pub mod username;
