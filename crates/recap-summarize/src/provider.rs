//! Summarizer trait seam.
//!
//! The pipeline and the HTTP layer depend on this trait instead of a
//! concrete model client, so per-chunk behavior is testable with scripted
//! fakes and alternative backends can slot in without touching callers.

use async_trait::async_trait;

/// Decoding bounds for one summarization call.
///
/// Decoding is always deterministic (no sampling); only the output length
/// window varies between the first and second pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummarizeParams {
    /// Maximum output length in model tokens.
    pub max_length: u32,
    /// Minimum output length in model tokens.
    pub min_length: u32,
}

/// Errors that can occur during a summarization call.
#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    /// Transport-level failure reaching the model endpoint.
    #[error("summarization request failed: {0}")]
    Http(String),

    /// Endpoint answered with a non-success status.
    #[error("summarization endpoint returned {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// Response did not contain the expected summary field.
    #[error("malformed summarization response: {0}")]
    MalformedResponse(String),

    /// Endpoint produced an empty summary.
    #[error("summarization produced an empty summary")]
    EmptySummary,
}

/// Abstractive summarization backend.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `text` within the given output-length bounds.
    ///
    /// A successful result is always non-empty; empty or malformed model
    /// output is reported as an error so callers can apply their own
    /// skip/recover policy.
    async fn summarize(
        &self,
        text: &str,
        params: SummarizeParams,
    ) -> Result<String, SummarizeError>;
}
