mod jwt;
mod password;

pub use jwt::{AccessTokenClaims, TokenError, TokenService};
pub use password::{PasswordError, PasswordHasher};
