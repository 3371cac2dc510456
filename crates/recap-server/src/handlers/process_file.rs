//! `POST /process-file`: upload → persist → (transcribe | read) →
//! normalize → summarize.
//!
//! The whole pipeline runs synchronously within the request. Uploads are
//! persisted under the configured directory keyed by the original filename
//! (final path component only, last write wins) before any processing, so a
//! failed transcription still leaves the audio on disk for inspection.

use std::path::Path;
use std::time::Instant;

use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;
use tracing::{info, instrument, warn};

use recap_core::text::normalize;
use recap_summarize::{SummaryOutcome, summarize_large_text};

use crate::context::AppContext;
use crate::errors::ApiError;
use crate::metrics::{
    SUMMARIZE_DURATION_SECONDS, SUMMARY_UNAVAILABLE_TOTAL, TRANSCRIBE_DURATION_SECONDS,
    UPLOAD_BYTES, UPLOADS_TOTAL,
};

/// Audio extensions routed through the speech-to-text backend.
const AUDIO_EXTENSIONS: &[&str] = &["m4a", "mp3", "wav"];

/// Successful response: the normalized document and its summary.
///
/// `summary` is either a real summary or the fixed unavailability sentinel —
/// clients match on the literal to detect total summarization failure.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessFileResponse {
    /// Normalized, trimmed document text.
    pub text: String,
    /// Final summary, or the sentinel failure string.
    pub summary: String,
}

/// Reduce an uploaded filename to its final path component.
///
/// Uploads are stored under their original name; stripping directory
/// components keeps a crafted `../../name` inside the upload directory.
fn safe_file_name(raw: &str) -> Option<String> {
    let name = Path::new(raw).file_name()?.to_str()?;
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

/// Pull the first file part out of the multipart request.
async fn read_upload(multipart: &mut Multipart) -> Result<(String, Vec<u8>), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart request: {e}")))?
    {
        let Some(raw_name) = field.file_name().map(ToString::to_string) else {
            continue;
        };
        let Some(file_name) = safe_file_name(&raw_name) else {
            return Err(ApiError::BadRequest(format!(
                "invalid file name: {raw_name}"
            )));
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("failed to read upload: {e}")))?;
        return Ok((file_name, bytes.to_vec()));
    }
    Err(ApiError::BadRequest("no file provided".to_string()))
}

/// Handle one upload end to end.
#[instrument(skip_all, fields(file_name = tracing::field::Empty))]
pub async fn process_file(
    State(ctx): State<AppContext>,
    mut multipart: Multipart,
) -> Result<Json<ProcessFileResponse>, ApiError> {
    let (file_name, bytes) = read_upload(&mut multipart).await?;
    let _ = tracing::Span::current().record("file_name", file_name.as_str());
    info!(bytes = bytes.len(), "received file");
    metrics::histogram!(UPLOAD_BYTES).record(bytes.len() as f64);

    tokio::fs::create_dir_all(&ctx.upload_dir).await?;
    tokio::fs::write(ctx.upload_dir.join(&file_name), &bytes).await?;

    let lower = file_name.to_lowercase();
    let extension = lower.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");

    let (kind, text) = if AUDIO_EXTENSIONS.contains(&extension) {
        let start = Instant::now();
        let transcript = ctx.transcriber.transcribe(&bytes, &file_name).await?;
        metrics::histogram!(TRANSCRIBE_DURATION_SECONDS).record(start.elapsed().as_secs_f64());
        info!(
            duration_seconds = ?transcript.duration_seconds,
            language = %transcript.language,
            "transcription complete"
        );
        ("audio", transcript.text)
    } else if extension == "txt" {
        // Decode permissively: invalid UTF-8 must never fail the request.
        ("text", String::from_utf8_lossy(&bytes).into_owned())
    } else {
        metrics::counter!(UPLOADS_TOTAL, "kind" => "unsupported", "status" => "rejected")
            .increment(1);
        return Err(ApiError::UnsupportedFileType);
    };

    let normalized = normalize(&text);
    let normalized = normalized.trim().to_string();
    if normalized.is_empty() {
        metrics::counter!(UPLOADS_TOTAL, "kind" => kind, "status" => "empty").increment(1);
        return Err(ApiError::EmptyFile);
    }
    info!(chars = normalized.len(), "text extracted");

    let start = Instant::now();
    let outcome = summarize_large_text(ctx.summarizer.as_ref(), &normalized).await;
    metrics::histogram!(SUMMARIZE_DURATION_SECONDS).record(start.elapsed().as_secs_f64());
    if outcome == SummaryOutcome::Unavailable {
        metrics::counter!(SUMMARY_UNAVAILABLE_TOTAL).increment(1);
        warn!("no usable summary produced");
    }
    metrics::counter!(UPLOADS_TOTAL, "kind" => kind, "status" => "ok").increment(1);

    Ok(Json(ProcessFileResponse {
        text: normalized,
        summary: outcome.into_wire(),
    }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
