//! HTTP router.
//!
//! Routes:
//! - `GET /` - sensor data / simulated field page
//! - `GET /results/*path` - files under the results root
//! - `GET /health` - health check
//! - `GET /metrics` - Prometheus metrics

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use viewer_http::results_files;

use crate::handlers;
use crate::paths::RESULTS_PREFIX;
use crate::state::AppState;

/// Build the HTTP router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let files = results_files(RESULTS_PREFIX, state.results_root.clone());

    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .merge(files)
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}
