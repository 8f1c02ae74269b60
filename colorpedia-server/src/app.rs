use axum::{
    Json, Router,
    extract::State,
    http::{HeaderName, HeaderValue, Method, StatusCode},
    routing::get,
};
use serde_json::{Value, json};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::routes;
use crate::state::AppState;

/// Assemble the full application router: API routes, liveness endpoints,
/// CORS, and request tracing.
pub fn create_app(state: AppState) -> Router {
    // CORS is permissive in dev, allow-list in prod
    let cors_layer = if state.config.dev_mode {
        CorsLayer::permissive()
    } else {
        build_cors_layer(&state.config.cors.allowed_origins)
    };

    Router::new()
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
        .merge(routes::api_router())
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list([Method::GET, Method::POST]))
        .allow_headers(AllowHeaders::list([HeaderName::from_static(
            "content-type",
        )]))
}

async fn ping_handler() -> Result<Json<Value>, StatusCode> {
    info!("Ping endpoint called");
    Ok(Json(json!({
        "status": "ok",
        "message": "Colorpedia server is running",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<Value>, StatusCode> {
    // The dataset is loaded before the server accepts traffic, so a
    // reachable process is a healthy one; report the moving parts anyway.
    Ok(Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {
            "dataset": {
                "status": "healthy",
                "records": state.dataset.len(),
            },
            "translation": {
                "configured": state.config.translate.url.is_some(),
                "target_lang": state.config.translate.target_lang,
            },
            "mood_model": {
                "configured": state.mood_model.is_some(),
            }
        }
    })))
}
