//! Read-only route over the results directory.
//!
//! `ServeDir` does the serving: content types, conditional and range
//! requests, `..` rejection. A layer in front of it answers 404 for anything
//! that is not a regular file inside the root, which also covers symlinks
//! whose target leaves the root, and counts every request.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use percent_encoding::percent_decode_str;
use tower_http::services::ServeDir;

use gp_common::resolve_asset;

use crate::metrics::record_asset_request;

#[derive(Clone)]
struct FileGuard {
    prefix: &'static str,
    root: Arc<PathBuf>,
}

/// Router serving files under `root` at `prefix`, ready to be merged.
pub fn results_files(prefix: &'static str, root: impl Into<PathBuf>) -> Router {
    let root = root.into();
    let guard = FileGuard {
        prefix,
        root: Arc::new(root.clone()),
    };

    Router::new()
        .nest_service(
            prefix,
            ServeDir::new(root).append_index_html_on_directories(false),
        )
        .layer(middleware::from_fn_with_state(guard, guard_files))
}

async fn guard_files(State(guard): State<FileGuard>, request: Request, next: Next) -> Response {
    let rel = {
        // Nesting strips the prefix from `uri()`; the original keeps it.
        let path = request
            .extensions()
            .get::<OriginalUri>()
            .map(|original| original.0.path())
            .unwrap_or_else(|| request.uri().path());
        let encoded = path.strip_prefix(guard.prefix).unwrap_or(path);
        percent_decode_str(encoded)
            .decode_utf8()
            .ok()
            .map(|decoded| decoded.into_owned())
    };

    let allowed = match rel {
        Some(rel) => {
            let root = Arc::clone(&guard.root);
            tokio::task::spawn_blocking(move || resolve_asset(&root, &rel).is_some())
                .await
                .unwrap_or(false)
        }
        None => false,
    };

    if !allowed {
        record_asset_request(false);
        return StatusCode::NOT_FOUND.into_response();
    }

    let response = next.run(request).await;
    record_asset_request(response.status().is_success());
    response
}
