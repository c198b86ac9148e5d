use axum::{Extension, extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

use clubhouse_types::api::{
    AnnouncementResponse, Claims, CreateAnnouncementRequest, MessageResponse,
};

use crate::AppState;
use crate::error::{ApiError, Json};

/// `GET /api/announcement` — public.
pub async fn list_announcements(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    let rows = tokio::task::spawn_blocking(move || db.db.list_announcements())
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal(e.to_string())
        })?
        .map_err(ApiError::from)?;

    let announcements: Vec<AnnouncementResponse> = rows
        .into_iter()
        .map(|row| AnnouncementResponse {
            id: row.id,
            title: row.title,
            description: row.description,
        })
        .collect();

    Ok(Json(announcements))
}

/// `POST /api/announcement` — gated.
pub async fn create_announcement(
    State(state): State<AppState>,
    Extension(_claims): Extension<Claims>,
    Json(req): Json<CreateAnnouncementRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    tokio::task::spawn_blocking(move || db.db.insert_announcement(&req.title, &req.description))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal(e.to_string())
        })?
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Announcement created successfully!".into(),
        }),
    ))
}
