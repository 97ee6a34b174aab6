//! Health and metrics handlers.

use std::sync::Arc;

use axum::{extract::Extension, response::Response, Json};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub dates: usize,
    pub sensors: usize,
    pub kernels: usize,
}

/// GET /health - Health check with catalog sizes
pub async fn health_handler(Extension(state): Extension<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "static-viewer".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dates: state.catalog.dates.len(),
        sensors: state.catalog.sensors.len(),
        kernels: state.catalog.kernels.len(),
    })
}

/// GET /metrics - Prometheus metrics
pub async fn metrics_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    viewer_http::metrics::prometheus_response(state.prometheus.as_ref())
}
