//! Password hashing and verification with Argon2id.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hashing(String),

    /// The stored hash is not a valid PHC string. Callers treat this as an
    /// authentication failure, not a crash.
    #[error("invalid password hash format: {0}")]
    InvalidHashFormat(String),

    #[error("password verification failed: {0}")]
    Verification(String),
}

/// Hash a password with Argon2id and a fresh random salt.
///
/// Returns a PHC-formatted string (parameters + salt + digest) suitable for
/// storage. Two calls with the same input never produce the same output.
pub fn hash_password(plaintext: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hashing(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash string.
///
/// The salt is taken from `stored`; comparison is constant-time inside the
/// argon2 crate. Returns `Ok(false)` for a wrong password.
pub fn verify_password(plaintext: &str, stored: &str) -> Result<bool, PasswordError> {
    let parsed =
        PasswordHash::new(stored).map_err(|e| PasswordError::InvalidHashFormat(e.to_string()))?;

    match Argon2::default().verify_password(plaintext.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::Verification(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verify_roundtrip() {
        let hash = hash_password("pw1").unwrap();
        assert!(verify_password("pw1", &hash).unwrap());
    }

    #[test]
    fn wrong_password_rejected() {
        let hash = hash_password("correct horse").unwrap();
        assert!(!verify_password("battery staple", &hash).unwrap());
    }

    #[test]
    fn salts_differ_per_call() {
        let h1 = hash_password("same input").unwrap();
        let h2 = hash_password("same input").unwrap();
        assert_ne!(h1, h2);

        assert!(verify_password("same input", &h1).unwrap());
        assert!(verify_password("same input", &h2).unwrap());
    }

    #[test]
    fn malformed_stored_hash_is_error_not_panic() {
        let result = verify_password("anything", "not-a-phc-string");
        assert!(matches!(result, Err(PasswordError::InvalidHashFormat(_))));
    }

    #[test]
    fn hash_is_phc_encoded() {
        let hash = hash_password("pw").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }
}
