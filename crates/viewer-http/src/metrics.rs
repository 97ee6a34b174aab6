//! Metrics shared by both services.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use metrics::counter;
use metrics_exporter_prometheus::PrometheusHandle;

/// Count one file request, labelled by outcome.
pub fn record_asset_request(found: bool) {
    let status = if found { "ok" } else { "not_found" };
    counter!("asset_requests_total", "status" => status).increment(1);
}

/// Prometheus text, or an empty body when no recorder is installed.
pub fn prometheus_response(handle: Option<&PrometheusHandle>) -> Response {
    let body = handle.map(|h| h.render()).unwrap_or_default();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
        .into_response()
}
