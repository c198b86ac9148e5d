pub mod announcements;
pub mod content;
pub mod error;
pub mod events;
pub mod middleware;
pub mod users;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};

use clubhouse_db::Database;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub token_secret: Vec<u8>,
}

/// Build the full API router. Read endpoints are public; every mutating
/// endpoint sits behind the auth gate. Login is the only public POST — it is
/// the endpoint that produces tokens in the first place.
pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/login", post(users::login))
        .route("/api/event", get(events::list_events))
        .route("/api/announcement", get(announcements::list_announcements))
        .route("/api/content", get(content::get_content))
        .with_state(state.clone());

    let protected = Router::new()
        .route("/api/user", post(users::create_user))
        .route("/api/event", post(events::create_event))
        .route("/api/announcement", post(announcements::create_announcement))
        .route("/api/content", post(content::create_content))
        .route(
            "/api/content/{id}",
            put(content::update_content).delete(content::delete_content),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_auth,
        ))
        .with_state(state);

    Router::new().merge(public).merge(protected)
}
