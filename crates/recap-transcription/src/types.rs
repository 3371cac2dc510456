//! Core types for the transcription seam.

use async_trait::async_trait;

/// Result of transcribing an audio file.
#[derive(Debug, Clone)]
pub struct Transcript {
    /// The transcribed text.
    pub text: String,
    /// Detected language code (e.g. "en").
    pub language: String,
    /// Duration of the audio in seconds, when the backend reports it.
    pub duration_seconds: Option<f64>,
}

/// Errors that can occur during transcription.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    /// Audio payload exceeds the accepted size.
    #[error("audio data too large: {size} bytes (max {max})")]
    TooLarge {
        /// Actual payload size in bytes.
        size: usize,
        /// Configured maximum in bytes.
        max: usize,
    },

    /// Transport-level failure reaching the sidecar.
    #[error("transcription request failed: {0}")]
    Http(String),

    /// Sidecar answered with a non-success status.
    #[error("transcription sidecar returned {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// Sidecar response did not contain the expected fields.
    #[error("malformed transcription response: {0}")]
    MalformedResponse(String),

    /// I/O error (file read/write).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extension trait to reduce `.map_err()` boilerplate when wrapping errors
/// into [`TranscriptionError`].
pub trait ResultExt<T> {
    /// Wrap the error as [`TranscriptionError::Http`] with `context` prefix.
    fn http(self, context: &str) -> Result<T, TranscriptionError>;
    /// Wrap the error as [`TranscriptionError::MalformedResponse`] with
    /// `context` prefix.
    fn malformed(self, context: &str) -> Result<T, TranscriptionError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn http(self, context: &str) -> Result<T, TranscriptionError> {
        self.map_err(|e| TranscriptionError::Http(format!("{context}: {e}")))
    }
    fn malformed(self, context: &str) -> Result<T, TranscriptionError> {
        self.map_err(|e| TranscriptionError::MalformedResponse(format!("{context}: {e}")))
    }
}

/// Speech-to-text backend.
///
/// `file_name` carries the original upload name so the backend can derive
/// the container format from the extension — sending m4a audio under a
/// `.wav` name makes decoders fail on the missing RIFF header.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe the given audio bytes.
    async fn transcribe(
        &self,
        audio: &[u8],
        file_name: &str,
    ) -> Result<Transcript, TranscriptionError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_fields() {
        let t = Transcript {
            text: "Hello world".into(),
            language: "en".into(),
            duration_seconds: Some(2.5),
        };
        assert_eq!(t.text, "Hello world");
        assert_eq!(t.language, "en");
        assert_eq!(t.duration_seconds, Some(2.5));
    }

    #[test]
    fn error_display() {
        let e = TranscriptionError::TooLarge {
            size: 100,
            max: 50,
        };
        assert!(e.to_string().contains("100"));
        assert!(e.to_string().contains("max 50"));

        let e = TranscriptionError::Api {
            status: 503,
            body: "loading".into(),
        };
        assert!(e.to_string().contains("503"));
        assert!(e.to_string().contains("loading"));
    }

    #[test]
    fn result_ext_http_context() {
        let err: Result<(), &str> = Err("connection refused");
        let mapped = err.http("sidecar post");
        assert!(
            matches!(mapped, Err(TranscriptionError::Http(s)) if s == "sidecar post: connection refused")
        );
    }

    #[test]
    fn result_ext_malformed_context() {
        let err: Result<(), &str> = Err("missing field");
        let mapped = err.malformed("parse body");
        assert!(
            matches!(mapped, Err(TranscriptionError::MalformedResponse(s)) if s == "parse body: missing field")
        );
    }

    #[test]
    fn result_ext_ok_passthrough() {
        let ok: Result<i32, &str> = Ok(42);
        assert_eq!(ok.http("ctx").unwrap(), 42);
    }
}
