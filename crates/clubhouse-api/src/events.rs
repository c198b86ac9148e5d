use axum::{Extension, extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use tracing::error;

use clubhouse_types::api::{Claims, CreateEventRequest, EventResponse, MessageResponse};

use crate::AppState;
use crate::error::{ApiError, Json};

/// `GET /api/event` — public.
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    let rows = tokio::task::spawn_blocking(move || db.db.list_events())
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal(e.to_string())
        })?
        .map_err(ApiError::from)?;

    let events: Vec<EventResponse> = rows
        .into_iter()
        .map(|row| EventResponse {
            id: row.id,
            name: row.name,
            description: row.description,
            date: row.date,
        })
        .collect();

    Ok(Json(events))
}

/// `POST /api/event` — gated. The date must parse as `YYYY-MM-DD` before
/// anything is written.
pub async fn create_event(
    State(state): State<AppState>,
    Extension(_claims): Extension<Claims>,
    Json(req): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let date = NaiveDate::parse_from_str(&req.date, "%Y-%m-%d")
        .map_err(|_| ApiError::Validation("date must be in YYYY-MM-DD format".into()))?;

    let db = state.clone();
    tokio::task::spawn_blocking(move || {
        db.db
            .insert_event(&req.name, &req.description, &date.to_string())
    })
    .await
    .map_err(|e| {
        error!("spawn_blocking join error: {}", e);
        ApiError::Internal(e.to_string())
    })?
    .map_err(ApiError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Event created successfully!".into(),
        }),
    ))
}
