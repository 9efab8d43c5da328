//! Authentication module
//!
//! Provides JWT-based authentication with argon2 password hashing and
//! digest-tracked refresh tokens.

mod jwt;
mod middleware;
mod password;
mod tokens;

pub use jwt::{Claims, JwtService};
pub use middleware::AuthGym;
pub use password::PasswordService;
pub use tokens::token_digest;
