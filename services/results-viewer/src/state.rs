//! Application state and shared resources.

use metrics_exporter_prometheus::PrometheusHandle;

use gp_common::{FsCatalog, ResultsLayout};

use crate::config::ViewerConfig;

/// Shared, read-only application state.
pub struct AppState {
    pub config: ViewerConfig,
    pub catalog: FsCatalog,
    /// Set when the binary installed a Prometheus recorder.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(config: ViewerConfig, prometheus: Option<PrometheusHandle>) -> Self {
        if !config.results_root.is_dir() {
            tracing::warn!(
                root = %config.results_root.display(),
                "Results root does not exist; pages will show the empty state"
            );
        }

        let catalog = FsCatalog::new(
            ResultsLayout::new(config.results_root.clone()),
            config.ignore.clone(),
        );

        Self {
            config,
            catalog,
            prometheus,
        }
    }

    pub fn layout(&self) -> &ResultsLayout {
        self.catalog.layout()
    }
}
