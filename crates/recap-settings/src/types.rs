//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase", default)]` so partial
//! JSON files work — missing fields get their compiled default during
//! deserialization. Each section implements [`Default`] with production
//! values.

use serde::{Deserialize, Serialize};

/// Root settings type for the recap service.
///
/// # JSON Format
///
/// All field names are camelCase. Example:
///
/// ```json
/// {
///   "server": { "port": 9090, "uploadDir": "/var/lib/recap/uploads" },
///   "summarizer": { "model": "facebook/bart-large-cnn" }
/// }
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RecapSettings {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Speech-to-text sidecar settings.
    pub transcription: TranscriptionSettings,
    /// Summarization model settings.
    pub summarizer: SummarizerSettings,
}

/// HTTP server network and upload settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerSettings {
    /// TCP port to bind.
    pub port: u16,
    /// Directory where uploads are persisted (created on startup).
    pub upload_dir: String,
    /// Maximum accepted request body size in bytes.
    pub max_upload_bytes: usize,
    /// Whole-request timeout in seconds. Transcription of long audio is
    /// slow, so this default is generous.
    pub request_timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            upload_dir: "uploads".to_string(),
            max_upload_bytes: 50 * 1024 * 1024,
            request_timeout_secs: 300,
        }
    }
}

/// Speech-to-text sidecar connection settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TranscriptionSettings {
    /// Base URL of the sidecar exposing `POST /transcribe`.
    pub base_url: String,
    /// Model identifier, reported for observability only — the sidecar owns
    /// model selection.
    pub model: String,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:9090".to_string(),
            model: "whisper-base".to_string(),
        }
    }
}

/// Abstractive summarization model settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SummarizerSettings {
    /// Base URL of a Hugging Face inference-protocol endpoint.
    pub base_url: String,
    /// Model identifier appended to the base URL.
    pub model: String,
    /// Optional bearer token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
}

impl Default for SummarizerSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api-inference.huggingface.co".to_string(),
            model: "facebook/bart-large-cnn".to_string(),
            api_token: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
