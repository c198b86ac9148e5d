pub mod password;
pub mod token;

pub use password::{PasswordError, hash_password, verify_password};
pub use token::{TOKEN_TTL, TokenError, issue, verify};
