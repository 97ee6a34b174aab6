//! Static export of a rendered page.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use axum::{body::Body, http::Request, Router};
use tower::ServiceExt;
use tracing::info;

use gp_common::GpError;

/// Send `GET /` through `router` and write the HTML to `output`.
pub async fn export_page(router: Router, output: &Path) -> Result<PathBuf> {
    let request = Request::builder()
        .uri("/")
        .body(Body::empty())
        .context("Failed to build export request")?;

    let response = router
        .oneshot(request)
        .await
        .context("Index request failed")?;

    if !response.status().is_success() {
        bail!("Index page returned HTTP {}", response.status());
    }

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .context("Failed to read index body")?;

    tokio::fs::write(output, &bytes)
        .await
        .map_err(|source| GpError::Write {
            path: output.to_path_buf(),
            source,
        })?;

    info!(path = %output.display(), bytes = bytes.len(), "Static HTML saved");
    Ok(output.to_path_buf())
}
