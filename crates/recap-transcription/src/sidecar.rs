//! HTTP sidecar transcription client.
//!
//! Speech recognition runs in a separate service (whisper or equivalent)
//! exposing `POST /transcribe` that accepts a multipart `audio` part and
//! returns JSON with at least a `text` field. This keeps the heavyweight
//! model runtime out of this process; the client stays a thin, reentrant
//! `reqwest` wrapper that is safely shared across requests.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::types::{ResultExt, Transcriber, Transcript, TranscriptionError};

/// Maximum audio size in bytes (50 MB).
pub const MAX_AUDIO_SIZE: usize = 50 * 1024 * 1024;

/// Map an upload filename extension to the MIME type sent to the sidecar.
fn mime_for_file(file_name: &str) -> &'static str {
    let ext = file_name.rsplit('.').next().unwrap_or_default();
    match ext.to_ascii_lowercase().as_str() {
        "m4a" | "mp4" | "aac" => "audio/mp4",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        _ => "application/octet-stream",
    }
}

/// Transcriber that delegates to an HTTP sidecar.
#[derive(Clone)]
pub struct SidecarTranscriber {
    base_url: String,
    client: reqwest::Client,
}

impl SidecarTranscriber {
    /// Create a new sidecar client for `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a new sidecar client with a shared HTTP client.
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            let _ = base_url.pop();
        }
        Self { base_url, client }
    }
}

#[async_trait]
impl Transcriber for SidecarTranscriber {
    #[instrument(skip(self, audio), fields(bytes = audio.len()))]
    async fn transcribe(
        &self,
        audio: &[u8],
        file_name: &str,
    ) -> Result<Transcript, TranscriptionError> {
        if audio.len() > MAX_AUDIO_SIZE {
            return Err(TranscriptionError::TooLarge {
                size: audio.len(),
                max: MAX_AUDIO_SIZE,
            });
        }

        let part = reqwest::multipart::Part::bytes(audio.to_vec())
            .file_name(file_name.to_string())
            .mime_str(mime_for_file(file_name))
            .malformed("build multipart part")?;
        let form = reqwest::multipart::Form::new().part("audio", part);

        let response = self
            .client
            .post(format!("{}/transcribe", self.base_url))
            .multipart(form)
            .send()
            .await
            .http("sidecar request")?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TranscriptionError::Api { status, body });
        }

        let body: Value = response.json().await.malformed("parse json body")?;

        let text = body
            .get("text")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                TranscriptionError::MalformedResponse("missing `text` field".to_string())
            })?
            .to_string();

        let transcript = Transcript {
            text,
            language: body
                .get("language")
                .and_then(Value::as_str)
                .unwrap_or("en")
                .to_string(),
            // None when the sidecar reports no measurement.
            duration_seconds: body
                .get("duration_s")
                .or_else(|| body.get("durationSeconds"))
                .and_then(Value::as_f64),
        };
        debug!(
            duration_seconds = ?transcript.duration_seconds,
            chars = transcript.text.len(),
            "transcription complete"
        );
        Ok(transcript)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
