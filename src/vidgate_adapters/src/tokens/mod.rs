pub mod jwt_authority;

pub use jwt_authority::{JwtTokenAuthority, TokenClassConfig};
