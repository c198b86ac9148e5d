use axum::{Extension, extract::State, http::StatusCode, response::IntoResponse};
use tracing::{error, info};

use clubhouse_auth::{hash_password, token, verify_password};
use clubhouse_db::DbError;
use clubhouse_types::api::{
    Claims, CreateUserRequest, LoginRequest, LoginResponse, MessageResponse,
};

use crate::AppState;
use crate::error::{ApiError, Json};

/// `POST /api/user` — registration, gated: only an authenticated caller may
/// create accounts.
pub async fn create_user(
    State(state): State<AppState>,
    Extension(_claims): Extension<Claims>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation(
            "username and password must not be empty".into(),
        ));
    }

    let password_hash =
        hash_password(&req.password).map_err(|e| ApiError::Internal(e.to_string()))?;

    // Run blocking DB insert off the async runtime
    let db = state.clone();
    let username = req.username.clone();
    tokio::task::spawn_blocking(move || db.db.create_user(&username, &password_hash))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal(e.to_string())
        })?
        .map_err(|e| match e {
            DbError::Duplicate => ApiError::Validation("username already exists".into()),
            other => other.into(),
        })?;

    info!("created user {}", req.username);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully!".into(),
        }),
    ))
}

/// `POST /login` — the one endpoint that produces tokens. Not gated.
///
/// Unknown usernames, wrong passwords and unreadable stored hashes all
/// collapse into the same 401 — nothing about the account leaks.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    let username = req.username.clone();
    let user = tokio::task::spawn_blocking(move || db.db.get_user_by_username(&username))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal(e.to_string())
        })?
        .map_err(ApiError::from)?
        .ok_or(ApiError::BadCredentials)?;

    let ok = verify_password(&req.password, &user.password_hash).unwrap_or(false);
    if !ok {
        return Err(ApiError::BadCredentials);
    }

    let token = token::issue(&state.token_secret, user.id, &user.username)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(LoginResponse {
        token,
        username: user.username,
    }))
}
