//! Prometheus wiring for pipeline and request metrics.
//!
//! Emitted series:
//!
//! - `textfix_normalize_total{outcome}`: normalization calls by result
//! - `textfix_normalize_seconds`: pipeline latency histogram
//! - `textfix_http_requests_total{status}`: responses by status code

use crate::error::{ServerError, ServerResult};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use normalize::NormalizeError;
use std::time::Duration;
use textfix::PipelineMetrics;

/// Install the process-wide Prometheus recorder.
///
/// Can only succeed once per process.
pub fn install_recorder() -> ServerResult<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|err| ServerError::Config(format!("metrics recorder: {err}")))
}

/// Forwards pipeline observations to the `metrics` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrometheusPipelineMetrics;

impl PipelineMetrics for PrometheusPipelineMetrics {
    fn record_normalize(&self, latency: Duration, result: Result<(), NormalizeError>) {
        let outcome = match result {
            Ok(()) => "ok",
            Err(NormalizeError::EmptyResult) => "empty_result",
            Err(NormalizeError::InvalidEncoding { .. }) => "invalid_encoding",
        };
        metrics::counter!("textfix_normalize_total", "outcome" => outcome).increment(1);
        metrics::histogram!("textfix_normalize_seconds").record(latency.as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_are_labelled() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            let observer = PrometheusPipelineMetrics;
            observer.record_normalize(Duration::from_micros(40), Ok(()));
            observer.record_normalize(Duration::from_micros(5), Err(NormalizeError::EmptyResult));
        });

        let rendered = handle.render();
        assert!(rendered.contains(r#"textfix_normalize_total{outcome="ok"} 1"#));
        assert!(rendered.contains(r#"textfix_normalize_total{outcome="empty_result"} 1"#));
        assert!(rendered.contains("textfix_normalize_seconds"));
    }
}
