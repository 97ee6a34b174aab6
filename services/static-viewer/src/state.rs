//! Application state and shared resources.

use std::path::PathBuf;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::CatalogConfig;

/// Shared, read-only application state.
pub struct AppState {
    /// Option catalog, fixed for the process lifetime
    pub catalog: CatalogConfig,

    /// Directory served under `/results`
    pub results_root: PathBuf,

    /// Set when the binary installed a Prometheus recorder
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        catalog: CatalogConfig,
        results_root: impl Into<PathBuf>,
        prometheus: Option<PrometheusHandle>,
    ) -> Self {
        let results_root = results_root.into();
        if !results_root.is_dir() {
            tracing::warn!(
                root = %results_root.display(),
                "Results root does not exist; every image request will 404"
            );
        }

        Self {
            catalog,
            results_root,
            prometheus,
        }
    }
}
