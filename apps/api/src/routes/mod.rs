pub mod health;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::render::handlers;
use crate::state::AppState;

/// GET {API_PREFIX}/v1/
/// Root endpoint with API information.
async fn api_info() -> Json<Value> {
    Json(json!({
        "name": "Resume Generator API",
        "endpoints": {
            "/": "API information",
            "/health": "Health check endpoint",
            "/resume/generate": "Generate a PDF resume (POST)"
        }
    }))
}

pub fn build_router(state: AppState) -> Router {
    let prefix = state.config.api_prefix.clone();

    Router::new()
        .route("/health", get(health::health_handler))
        .route(&format!("{prefix}/v1/"), get(api_info))
        .route(
            &format!("{prefix}/v1/resume/generate"),
            post(handlers::handle_generate_resume),
        )
        .with_state(state)
}
