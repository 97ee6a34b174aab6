//! Page metrics. File requests are counted in `viewer_http`.
//!
//! Thin wrappers over the `metrics` macros; they are no-ops until a recorder
//! is installed, so tests and export runs need no setup.

use std::time::Duration;

use metrics::{counter, histogram};

/// Count one rendered page, labelled by mode.
pub fn record_page_request(mode: &'static str) {
    counter!("page_requests_total", "mode" => mode).increment(1);
}

/// Time spent discovering options and scanning kernel directories.
pub fn record_catalog_scan(elapsed: Duration) {
    histogram!("catalog_scan_duration_ms").record(elapsed.as_secs_f64() * 1000.0);
}
