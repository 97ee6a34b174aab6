//! HTTP router.
//!
//! Routes:
//! - `GET /` - view / compare page
//! - `GET /img/*path` - image files under the results root
//! - `GET /health` - health check
//! - `GET /metrics` - Prometheus metrics

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use viewer_http::results_files;

use crate::config::IMG_PREFIX;
use crate::handlers;
use crate::state::AppState;

/// Build the HTTP router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let files = results_files(IMG_PREFIX, state.config.results_root.clone());

    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .merge(files)
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}
