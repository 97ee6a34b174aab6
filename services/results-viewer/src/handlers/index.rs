//! Index page handler.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, error};

use gp_common::{resolve_images, ClosedChoice, QueryArgs};

use crate::metrics;
use crate::page::render_index;
use crate::resolve::{resolve_request, IndexParams};
use crate::state::AppState;

/// GET / - Resolve the query and render the page.
///
/// Repeated keys keep their first value; a query string that does not parse
/// at all is treated like an empty one.
pub async fn index_handler(
    Extension(state): Extension<Arc<AppState>>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Response {
    let args = QueryArgs::from_pairs(query.map(|Query(pairs)| pairs).unwrap_or_default());
    let params = IndexParams::from_args(&args);

    // Directory scans are blocking filesystem calls.
    let result = tokio::task::spawn_blocking(move || {
        let started = Instant::now();
        let view = resolve_request(&params, &state.catalog);
        let images = resolve_images(
            state.layout(),
            &state.config.url_prefix,
            &view.state.date,
            &view.state.variable,
        );
        metrics::record_catalog_scan(started.elapsed());

        debug!(
            mode = view.state.mode.as_str(),
            date = %view.state.date,
            variable = %view.state.variable,
            kernel = %view.state.kernel,
            panels = ?view.state.panels(),
            "Resolved request"
        );
        metrics::record_page_request(view.state.mode.as_str());

        render_index(&state.config, &view, &images)
    })
    .await;

    match result {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "Page rendering task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}
