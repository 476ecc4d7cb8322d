//! Liveness check
//!
//! `/health` also reads the artwork list, so a broken data directory shows
//! up as 503 rather than as failures on the first real request.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;

use super::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artworks: Option<usize>,
}

pub fn health_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn health_handler(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION");
    match state.gallery.artwork_count() {
        Ok(count) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version,
                artworks: Some(count),
            }),
        ),
        Err(e) => {
            warn!(error = %e, "health check could not read artworks");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    version,
                    artworks: None,
                }),
            )
        }
    }
}
