//! The request gate: Authorization header parsing + token verification.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use thiserror::Error;
use tracing::debug;

use clubhouse_auth::{TokenError, token};
use clubhouse_types::api::Claims;

use crate::AppState;
use crate::error::ApiError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing token")]
    MissingToken,

    #[error("malformed authorization header")]
    Malformed,

    #[error("token has expired")]
    Expired,

    #[error("invalid signature")]
    InvalidSignature,
}

impl From<TokenError> for AuthError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Expired => AuthError::Expired,
            TokenError::InvalidSignature => AuthError::InvalidSignature,
            TokenError::Malformed => AuthError::Malformed,
        }
    }
}

/// Check a request's `Authorization` header and return the session claims.
///
/// The header is expected as `Bearer <token>`. A header with no second
/// whitespace-separated token is `Malformed`, never an out-of-range access.
pub fn authenticate(secret: &[u8], header: Option<&str>) -> Result<Claims, AuthError> {
    let header = header.ok_or(AuthError::MissingToken)?;

    let mut parts = header.split_whitespace();
    let token = match (parts.next(), parts.next()) {
        (Some(_scheme), Some(token)) => token,
        _ => return Err(AuthError::Malformed),
    };

    Ok(token::verify(secret, token)?)
}

/// Extract and validate the session token before the handler runs. On any
/// failure the response is a uniform 401 and the store is never touched.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let claims = authenticate(&state.token_secret, header).map_err(|e| {
        debug!("rejected request to {}: {}", req.uri().path(), e);
        ApiError::Unauthorized
    })?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubhouse_auth::token;

    const SECRET: &[u8] = b"gate-test-secret";

    #[test]
    fn missing_header_is_missing_token() {
        assert_eq!(
            authenticate(SECRET, None).unwrap_err(),
            AuthError::MissingToken
        );
    }

    #[test]
    fn header_without_token_is_malformed() {
        assert_eq!(
            authenticate(SECRET, Some("Bearer")).unwrap_err(),
            AuthError::Malformed
        );
        assert_eq!(
            authenticate(SECRET, Some("")).unwrap_err(),
            AuthError::Malformed
        );
        assert_eq!(
            authenticate(SECRET, Some("   ")).unwrap_err(),
            AuthError::Malformed
        );
    }

    #[test]
    fn garbage_token_is_rejected_not_a_panic() {
        let err = authenticate(SECRET, Some("Bearer garbage")).unwrap_err();
        assert_eq!(err, AuthError::Malformed);
    }

    #[test]
    fn tampered_token_is_invalid_signature() {
        let token = token::issue(b"some-other-secret", 1, "alice").unwrap();
        let header = format!("Bearer {}", token);

        assert_eq!(
            authenticate(SECRET, Some(&header)).unwrap_err(),
            AuthError::InvalidSignature
        );
    }

    #[test]
    fn valid_token_yields_claims() {
        let token = token::issue(SECRET, 42, "alice").unwrap();
        let header = format!("Bearer {}", token);

        let claims = authenticate(SECRET, Some(&header)).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.username, "alice");
    }
}
