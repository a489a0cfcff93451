use crate::config::ServerConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Render handle for the installed Prometheus recorder, if any
    pub prometheus: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state without a metrics recorder
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            prometheus: None,
        }
    }

    /// Attach the handle used by `GET /metrics`
    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
