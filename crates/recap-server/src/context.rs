//! Injected application state.
//!
//! The two model clients are constructed once at startup and shared
//! read-only across requests. There is no ambient global: everything a
//! handler needs travels through this context, which makes tests a matter
//! of building one with fakes.

use std::path::PathBuf;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use recap_summarize::Summarizer;
use recap_transcription::Transcriber;

/// Shared per-process state handed to every request handler.
#[derive(Clone)]
pub struct AppContext {
    /// Speech-to-text backend.
    pub transcriber: Arc<dyn Transcriber>,
    /// Summarization backend.
    pub summarizer: Arc<dyn Summarizer>,
    /// Directory where uploads are persisted.
    pub upload_dir: PathBuf,
    /// Prometheus render handle; `None` when no recorder is installed
    /// (tests).
    pub metrics: Option<PrometheusHandle>,
}

impl AppContext {
    /// Build a context from owned service handles.
    #[must_use]
    pub fn new(
        transcriber: Arc<dyn Transcriber>,
        summarizer: Arc<dyn Summarizer>,
        upload_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            transcriber,
            summarizer,
            upload_dir: upload_dir.into(),
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
