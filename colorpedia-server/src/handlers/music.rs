use axum::{Json, extract::State};
use colorpedia_core::{SongMetadata, suggest_music};
use tracing::{info, warn};

use crate::errors::{AppError, AppResult};
use crate::handlers::analyze::AnalyzeResponse;
use crate::state::AppState;

/// Ask the mood model to describe a hypothetical song.
///
/// 503 when no model endpoint is configured, 500 when the model call fails.
pub async fn recommend_music_handler(
    State(state): State<AppState>,
    Json(metadata): Json<SongMetadata>,
) -> AppResult<Json<AnalyzeResponse>> {
    let Some(model) = &state.mood_model else {
        return Err(AppError::service_unavailable(
            "music recommendation is not configured on this server",
        ));
    };

    match suggest_music(model.as_ref(), &metadata).await {
        Ok(result) => {
            info!(
                genre = metadata.genre.as_deref().unwrap_or("ambient"),
                "mood suggestion generated"
            );
            Ok(Json(AnalyzeResponse { result }))
        }
        Err(err) => {
            warn!(error = %err, "mood model call failed");
            Err(err.into())
        }
    }
}
