//! Workspace umbrella crate for Textfix.
//!
//! This crate re-exports the normalization pipeline and wraps it with an
//! optional process-wide metrics observer so hosts (the HTTP server, batch
//! jobs) can time calls without touching the pure pipeline crate.

pub use normalize::{
    finish, inspect, normalize, normalize_bytes, NormalizationTrace, NormalizeError, Stage,
    StageOutput, STAGES, TERMINAL_PUNCTUATION,
};

use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

/// Metrics observer for normalization calls.
pub trait PipelineMetrics: Send + Sync {
    fn record_normalize(&self, latency: Duration, result: Result<(), NormalizeError>);
}

/// Install or clear the global pipeline metrics recorder.
pub fn set_pipeline_metrics(recorder: Option<Arc<dyn PipelineMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn PipelineMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn PipelineMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn PipelineMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn PipelineMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record(self, result: Result<(), NormalizeError>) {
        self.recorder.record_normalize(self.start.elapsed(), result);
    }
}

/// Normalize `text`, reporting latency and outcome to the installed
/// [`PipelineMetrics`] recorder.
pub fn process_text(text: &str) -> Result<String, NormalizeError> {
    let span = MetricsSpan::start();
    let result = normalize(text);
    observe(span, text.len(), &result);
    result
}

/// Byte-level variant of [`process_text`]. Invalid UTF-8 is reported as
/// [`NormalizeError::InvalidEncoding`] and counted like any other failure.
pub fn process_bytes(bytes: &[u8]) -> Result<String, NormalizeError> {
    let span = MetricsSpan::start();
    let result = normalize_bytes(bytes);
    observe(span, bytes.len(), &result);
    result
}

fn observe(span: Option<MetricsSpan>, input_len: usize, result: &Result<String, NormalizeError>) {
    match result {
        Ok(out) => {
            tracing::debug!(input_len, output_len = out.len(), "text normalized");
        }
        Err(err) => {
            tracing::debug!(input_len, error = %err, "normalization rejected input");
        }
    }
    if let Some(span) = span {
        span.record(result.as_ref().map(|_| ()).map_err(|err| err.clone()));
    }
}
