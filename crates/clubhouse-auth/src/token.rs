//! Session token issue and verification.
//!
//! Tokens are JWTs signed with HMAC-SHA256 under a process-wide secret.
//! Expiry is fixed at issuance; callers cannot request a longer lifetime.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use thiserror::Error;

use clubhouse_types::api::Claims;

/// Session lifetime. Tokens are not revocable before expiry.
pub const TOKEN_TTL: Duration = Duration::minutes(30);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token is malformed")]
    Malformed,
}

/// Build a signed session token for a user.
pub fn issue(secret: &[u8], user_id: i64, username: &str) -> Result<String, TokenError> {
    let claims = Claims {
        user_id,
        username: username.to_string(),
        exp: (Utc::now() + TOKEN_TTL).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|_| TokenError::Malformed)
}

/// Validate a token's signature and expiry, returning its claims.
///
/// The accepted algorithm is pinned to HS256; a token declaring any other
/// algorithm in its header is rejected outright.
pub fn verify(secret: &[u8], token: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is a hard boundary, no clock leeway.
    validation.leeway = 0;

    let data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation).map_err(
        |e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
        },
    )?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret";

    fn encode_with(secret: &[u8], algorithm: Algorithm, claims: &Claims) -> String {
        encode(
            &Header::new(algorithm),
            claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    #[test]
    fn issue_verify_roundtrip() {
        let token = issue(SECRET, 7, "alice").unwrap();
        let claims = verify(SECRET, &token).unwrap();

        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn expiry_is_thirty_minutes_from_issuance() {
        let before = (Utc::now() + TOKEN_TTL).timestamp();
        let token = issue(SECRET, 1, "alice").unwrap();
        let after = (Utc::now() + TOKEN_TTL).timestamp();

        let claims = verify(SECRET, &token).unwrap();
        assert!(claims.exp >= before && claims.exp <= after);
    }

    #[test]
    fn wrong_secret_rejected() {
        let token = issue(SECRET, 1, "alice").unwrap();
        assert_eq!(
            verify(b"other-secret", &token),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn expired_token_rejected() {
        let claims = Claims {
            user_id: 1,
            username: "alice".into(),
            exp: (Utc::now() - Duration::seconds(5)).timestamp(),
        };
        let token = encode_with(SECRET, Algorithm::HS256, &claims);

        assert_eq!(verify(SECRET, &token), Err(TokenError::Expired));
    }

    #[test]
    fn token_valid_just_before_expiry() {
        let claims = Claims {
            user_id: 1,
            username: "alice".into(),
            exp: (Utc::now() + Duration::seconds(30)).timestamp(),
        };
        let token = encode_with(SECRET, Algorithm::HS256, &claims);

        assert!(verify(SECRET, &token).is_ok());
    }

    #[test]
    fn foreign_algorithm_rejected() {
        let claims = Claims {
            user_id: 1,
            username: "alice".into(),
            exp: (Utc::now() + TOKEN_TTL).timestamp(),
        };
        let token = encode_with(SECRET, Algorithm::HS384, &claims);

        assert!(verify(SECRET, &token).is_err());
    }

    #[test]
    fn garbage_token_is_malformed() {
        assert_eq!(verify(SECRET, "not.a.jwt"), Err(TokenError::Malformed));
        assert_eq!(verify(SECRET, ""), Err(TokenError::Malformed));
    }
}
