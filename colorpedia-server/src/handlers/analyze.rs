use axum::{Json, extract::State};
use colorpedia_core::{MatchResult, resolve};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: String,
}

/// Resolve a color query and render its bilingual report.
///
/// Invalid queries become a 400 with the original query text in the
/// message; with a loaded dataset every parseable query succeeds.
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> AppResult<Json<AnalyzeResponse>> {
    let matched = resolve(&state.dataset, &request.color)?;

    match &matched {
        MatchResult::Exact(record) => {
            info!(query = %request.color, color = %record.name, "exact match");
        }
        MatchResult::Nearest { record, distance } => {
            info!(
                query = %request.color,
                color = %record.name,
                distance,
                "nearest match"
            );
        }
    }

    let report = state.formatter.format(&matched, &request.color).await;

    Ok(Json(AnalyzeResponse {
        result: report.render(),
    }))
}
