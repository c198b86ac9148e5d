use axum::{
    Extension,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::error;

use clubhouse_types::api::{
    Claims, ContentBody, ContentResponse, CreateContentRequest, MessageResponse,
    UpdateContentRequest,
};

use crate::AppState;
use crate::error::{ApiError, Json};

#[derive(Debug, Deserialize)]
pub struct ContentQuery {
    pub tag: Option<String>,
}

/// `GET /api/content` — public. With `?tag=T` returns the text for that tag
/// (404 if absent); without a tag, or with an empty one, returns every
/// record.
pub async fn get_content(
    State(state): State<AppState>,
    Query(query): Query<ContentQuery>,
) -> Result<Response, ApiError> {
    let db = state.clone();

    match query.tag.filter(|t| !t.is_empty()) {
        Some(tag) => {
            let row = tokio::task::spawn_blocking(move || db.db.get_content_by_tag(&tag))
                .await
                .map_err(|e| {
                    error!("spawn_blocking join error: {}", e);
                    ApiError::Internal(e.to_string())
                })?
                .map_err(ApiError::from)?
                .ok_or(ApiError::NotFound("Content not found"))?;

            Ok(Json(ContentBody {
                content: row.content,
            })
            .into_response())
        }
        None => {
            let rows = tokio::task::spawn_blocking(move || db.db.list_content())
                .await
                .map_err(|e| {
                    error!("spawn_blocking join error: {}", e);
                    ApiError::Internal(e.to_string())
                })?
                .map_err(ApiError::from)?;

            let contents: Vec<ContentResponse> = rows
                .into_iter()
                .map(|row| ContentResponse {
                    id: row.id,
                    tag: row.tag,
                    content: row.content,
                })
                .collect();

            Ok(Json(contents).into_response())
        }
    }
}

/// `POST /api/content` — gated.
pub async fn create_content(
    State(state): State<AppState>,
    Extension(_claims): Extension<Claims>,
    Json(req): Json<CreateContentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    tokio::task::spawn_blocking(move || db.db.insert_content(&req.tag, &req.content))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal(e.to_string())
        })?
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Content created successfully!".into(),
        }),
    ))
}

/// `PUT /api/content/{id}` — gated; auth runs before the record is looked up.
pub async fn update_content(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(_claims): Extension<Claims>,
    Json(req): Json<UpdateContentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    let changed = tokio::task::spawn_blocking(move || db.db.update_content(id, &req.content))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal(e.to_string())
        })?
        .map_err(ApiError::from)?;

    if !changed {
        return Err(ApiError::NotFound("Content not found"));
    }

    Ok(Json(MessageResponse {
        message: "Content updated successfully!".into(),
    }))
}

/// `DELETE /api/content/{id}` — gated.
pub async fn delete_content(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(_claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    let deleted = tokio::task::spawn_blocking(move || db.db.delete_content(id))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal(e.to_string())
        })?
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::NotFound("Content not found"));
    }

    Ok(Json(MessageResponse {
        message: "Content deleted successfully!".into(),
    }))
}
