pub mod change_password;
pub mod login;
pub mod logout;
pub mod refresh_session;
pub mod register;
