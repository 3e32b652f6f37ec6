//! Application state for the swatch API.

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::ServerConfig;

/// Shared, read-only application state.
pub struct AppState {
    pub config: ServerConfig,

    /// Renders the Prometheus exposition for `/metrics`.
    pub prometheus: PrometheusHandle,
}

impl AppState {
    pub fn new(config: ServerConfig, prometheus: PrometheusHandle) -> Self {
        Self { config, prometheus }
    }
}
