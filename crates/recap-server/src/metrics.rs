//! Prometheus metrics recorder and `/metrics` endpoint handler.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;

/// Install the Prometheus metrics recorder (global).
///
/// Returns the `PrometheusHandle` used to render the `/metrics` endpoint.
/// Must be called once at server startup before any metrics are recorded.
pub fn install_recorder() -> PrometheusHandle {
    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .expect("failed to install metrics recorder");
    info!("prometheus metrics recorder installed");
    handle
}

/// Render Prometheus text format from the installed recorder.
pub fn render(handle: &PrometheusHandle) -> String {
    handle.render()
}

// Metric name constants to avoid typos across modules.

/// Uploads processed (counter, labels: kind, status).
pub const UPLOADS_TOTAL: &str = "uploads_total";
/// Upload payload sizes in bytes (histogram).
pub const UPLOAD_BYTES: &str = "upload_bytes";
/// Transcription duration seconds (histogram).
pub const TRANSCRIBE_DURATION_SECONDS: &str = "transcribe_duration_seconds";
/// Summarization pipeline duration seconds (histogram).
pub const SUMMARIZE_DURATION_SECONDS: &str = "summarize_duration_seconds";
/// Runs that produced no usable summary (counter).
pub const SUMMARY_UNAVAILABLE_TOTAL: &str = "summary_unavailable_total";
