use serde::{Deserialize, Serialize};

// -- JWT Claims --

/// JWT claims shared between clubhouse-auth (issue/verify) and clubhouse-api
/// (request gate). Canonical definition lives here in clubhouse-types to
/// eliminate duplication.
///
/// Claim names (`user_id`, `username`, `exp`) are part of the wire format;
/// tokens are consumed by the site frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub username: String,
    pub exp: i64,
}

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response carries the token and the username only. Credentials are
/// never echoed back.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

// -- Events --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: String,
    /// ISO date, `YYYY-MM-DD`. Validated before insert.
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub date: String,
}

// -- Announcements --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnnouncementResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
}

// -- Page content --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateContentRequest {
    pub tag: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateContentRequest {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContentResponse {
    pub id: i64,
    pub tag: String,
    pub content: String,
}

/// Body for `GET /api/content?tag=...` — the original API returns just the
/// content text for a tag lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContentBody {
    pub content: String,
}

// -- Generic bodies --

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
