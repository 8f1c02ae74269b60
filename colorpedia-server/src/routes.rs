use axum::{Router, routing::post};

use crate::handlers::{analyze::analyze_handler, music::recommend_music_handler};
use crate::state::AppState;

/// Create the API routes
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/recommend-music", post(recommend_music_handler))
}
