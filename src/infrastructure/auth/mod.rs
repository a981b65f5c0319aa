//! Token signing and password storage.

mod jwt;
mod password;

pub use jwt::{AuthenticatedUser, Claims, TokenIssuer};
pub use password::PasswordScheme;
