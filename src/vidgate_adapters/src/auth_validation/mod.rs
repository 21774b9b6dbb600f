pub mod cookies;
pub mod jwt_request_gate;

pub use cookies::{create_auth_cookie, create_removal_cookie};
pub use jwt_request_gate::JwtRequestGate;
