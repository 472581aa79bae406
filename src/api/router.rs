//! HTTP route table

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::state::AppState;
use super::{auth, health, places};

/// Largest accepted request body; photo uploads arrive as multipart
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(health::health_check))
        // Authentication API
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/users/me", get(auth::current_user))
        // Places API
        .route(
            "/places/",
            post(places::create_place).get(places::list_places),
        )
        .route("/places/bbox/", get(places::places_by_bounding_box))
        .route("/users/{user_id}/places", get(places::places_by_user))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
