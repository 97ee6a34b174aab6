//! Index page handler.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::Html,
};
use tracing::debug;

use gp_common::{ClosedChoice, QueryArgs};

use crate::metrics;
use crate::page::render_index;
use crate::resolve::{resolve_request, IndexParams};
use crate::state::AppState;

/// GET / - Resolve the query against the catalog and render the page.
///
/// Repeated keys keep their first value.
pub async fn index_handler(
    Extension(state): Extension<Arc<AppState>>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Html<String> {
    let args = QueryArgs::from_pairs(query.map(|Query(pairs)| pairs).unwrap_or_default());
    let params = IndexParams::from_args(&args);
    let resolved = resolve_request(&params, &state.catalog);

    debug!(
        tab = resolved.tab.as_str(),
        date = %resolved.date,
        sensor = %resolved.sensor,
        kernel = %resolved.kernel,
        "Resolved request"
    );
    metrics::record_page_request(resolved.tab.as_str());

    Html(render_index(&state.catalog, &resolved))
}
