//! API error type and HTTP response mapping.
//!
//! Two tiers: validation errors map to 400 with a fixed message, everything
//! unexpected maps to 500 carrying the underlying error text in
//! `{"error": ...}`. Total summarization failure is *not* an error at this
//! layer — it rides inside a 200 response as the sentinel summary string.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use recap_transcription::TranscriptionError;

/// Errors surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Upload extension is not one of the supported types.
    #[error("Unsupported file type. Use .m4a, .mp3, .wav or .txt")]
    UnsupportedFileType,

    /// Extracted text was empty after normalization and trimming.
    #[error("File is empty")]
    EmptyFile,

    /// The multipart request itself was unusable.
    #[error("{0}")]
    BadRequest(String),

    /// Anything unexpected: I/O, transcription transport, etc.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnsupportedFileType | Self::EmptyFile | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TranscriptionError> for ApiError {
    fn from(e: TranscriptionError) -> Self {
        Self::Internal(e.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        Self::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Internal(_)) {
            error!(error = %self, "request failed");
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
