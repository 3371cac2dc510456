//! Hierarchical chunked summarization.
//!
//! The document is sliced into fixed-size chunks, each chunk is summarized
//! independently, and the fragments are joined in order. When the joined
//! text is still long, one second pass condenses it further. Per-chunk and
//! second-pass failures are recoverable: they are logged and skipped, and
//! only a run that produces no usable fragment at all surfaces as
//! [`SummaryOutcome::Unavailable`].

use tracing::warn;

use recap_core::chunk::chunk_text;

use crate::provider::{SummarizeParams, Summarizer};

/// Chunk size in characters for the first pass.
pub const MAX_CHUNK_CHARS: usize = 3000;

/// Chunks whose trimmed length falls below this carry no summarizable
/// content and are skipped without a model call.
pub const MIN_CHUNK_CHARS: usize = 50;

/// A combined first-pass summary longer than this triggers the second pass.
pub const SECOND_PASS_THRESHOLD_CHARS: usize = 1000;

/// Output-length bounds for per-chunk summarization.
pub const FIRST_PASS_PARAMS: SummarizeParams = SummarizeParams {
    max_length: 200,
    min_length: 30,
};

/// Output-length bounds for the second pass over the concatenation.
pub const SECOND_PASS_PARAMS: SummarizeParams = SummarizeParams {
    max_length: 200,
    min_length: 50,
};

/// Wire-compatible message emitted when no summary could be produced.
///
/// Existing clients detect total summarization failure by matching this
/// literal inside an otherwise successful response.
pub const UNAVAILABLE_MESSAGE: &str =
    "Error: Could not generate summary. Text might be too short or empty.";

/// Outcome of a summarization run.
///
/// Total failure is data, not an error: the service still answers 200 and
/// callers distinguish it from transport errors. Internally it stays a
/// proper discriminated result and is only flattened to
/// [`UNAVAILABLE_MESSAGE`] at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// At least one chunk produced a usable summary.
    Summary(String),
    /// Every chunk was skipped or failed.
    Unavailable,
}

impl SummaryOutcome {
    /// Flatten to the wire representation.
    #[must_use]
    pub fn into_wire(self) -> String {
        match self {
            Self::Summary(text) => text,
            Self::Unavailable => UNAVAILABLE_MESSAGE.to_string(),
        }
    }
}

/// Summarize a document of arbitrary size with the chunked two-pass scheme.
pub async fn summarize_large_text(summarizer: &dyn Summarizer, text: &str) -> SummaryOutcome {
    let mut fragments: Vec<String> = Vec::new();

    for (index, chunk) in chunk_text(text, MAX_CHUNK_CHARS).into_iter().enumerate() {
        let chunk = chunk.trim();
        if chunk.chars().count() < MIN_CHUNK_CHARS {
            continue;
        }

        match summarizer.summarize(chunk, FIRST_PASS_PARAMS).await {
            Ok(fragment) if fragment.trim().is_empty() => {
                warn!(chunk = index, "empty summary for chunk, skipping");
            }
            Ok(fragment) => fragments.push(fragment),
            Err(e) => {
                warn!(chunk = index, error = %e, "chunk summarization failed, skipping");
            }
        }
    }

    if fragments.is_empty() {
        return SummaryOutcome::Unavailable;
    }

    let combined = fragments.join(" ");

    if combined.chars().count() > SECOND_PASS_THRESHOLD_CHARS {
        match summarizer.summarize(&combined, SECOND_PASS_PARAMS).await {
            Ok(condensed) if !condensed.trim().is_empty() => {
                return SummaryOutcome::Summary(condensed);
            }
            Ok(_) => warn!("empty second-pass summary, keeping first-pass result"),
            Err(e) => warn!(error = %e, "second pass failed, keeping first-pass result"),
        }
    }

    SummaryOutcome::Summary(combined)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::SummarizeError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Scripted fake: pops pre-programmed responses in order and records
    /// every call it receives.
    struct ScriptedSummarizer {
        responses: Mutex<Vec<Result<String, SummarizeError>>>,
        calls: Mutex<Vec<(String, SummarizeParams)>>,
    }

    impl ScriptedSummarizer {
        fn new(responses: Vec<Result<String, SummarizeError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(String, SummarizeParams)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Summarizer for ScriptedSummarizer {
        async fn summarize(
            &self,
            text: &str,
            params: SummarizeParams,
        ) -> Result<String, SummarizeError> {
            self.calls
                .lock()
                .unwrap()
                .push((text.to_string(), params));
            let mut responses = self.responses.lock().unwrap();
            assert!(!responses.is_empty(), "unexpected summarize call");
            responses.remove(0)
        }
    }

    /// A document long enough to clear the minimum-chunk threshold.
    fn long_text(chars: usize) -> String {
        "a".repeat(chars)
    }

    #[tokio::test]
    async fn short_sole_chunk_is_unavailable() {
        let summarizer = ScriptedSummarizer::new(vec![]);
        let outcome = summarize_large_text(&summarizer, "hi").await;
        assert_eq!(outcome, SummaryOutcome::Unavailable);
        assert_eq!(outcome.into_wire(), UNAVAILABLE_MESSAGE);
        assert!(summarizer.calls().is_empty(), "no model call for short text");
    }

    #[tokio::test]
    async fn empty_text_is_unavailable() {
        let summarizer = ScriptedSummarizer::new(vec![]);
        assert_eq!(
            summarize_large_text(&summarizer, "").await,
            SummaryOutcome::Unavailable
        );
    }

    #[tokio::test]
    async fn single_chunk_uses_first_pass_params() {
        let summarizer = ScriptedSummarizer::new(vec![Ok("the summary".to_string())]);
        let outcome = summarize_large_text(&summarizer, &long_text(100)).await;
        assert_eq!(outcome, SummaryOutcome::Summary("the summary".to_string()));

        let calls = summarizer.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, FIRST_PASS_PARAMS);
    }

    #[tokio::test]
    async fn fragments_joined_with_single_space_in_order() {
        let summarizer = ScriptedSummarizer::new(vec![
            Ok("first.".to_string()),
            Ok("second.".to_string()),
        ]);
        // Two chunks of 3000 chars each.
        let outcome = summarize_large_text(&summarizer, &long_text(6000)).await;
        assert_eq!(
            outcome,
            SummaryOutcome::Summary("first. second.".to_string())
        );
    }

    #[tokio::test]
    async fn failed_chunk_is_skipped_not_fatal() {
        let summarizer = ScriptedSummarizer::new(vec![
            Err(SummarizeError::EmptySummary),
            Ok("survivor.".to_string()),
        ]);
        let outcome = summarize_large_text(&summarizer, &long_text(6000)).await;
        assert_eq!(outcome, SummaryOutcome::Summary("survivor.".to_string()));
    }

    #[tokio::test]
    async fn empty_fragment_is_skipped() {
        let summarizer =
            ScriptedSummarizer::new(vec![Ok("  ".to_string()), Ok("real.".to_string())]);
        let outcome = summarize_large_text(&summarizer, &long_text(6000)).await;
        assert_eq!(outcome, SummaryOutcome::Summary("real.".to_string()));
    }

    #[tokio::test]
    async fn all_chunks_failing_is_unavailable() {
        let summarizer = ScriptedSummarizer::new(vec![
            Err(SummarizeError::Http("down".to_string())),
            Err(SummarizeError::Http("down".to_string())),
        ]);
        let outcome = summarize_large_text(&summarizer, &long_text(6000)).await;
        assert_eq!(outcome, SummaryOutcome::Unavailable);
    }

    #[tokio::test]
    async fn short_combined_summary_skips_second_pass() {
        let summarizer = ScriptedSummarizer::new(vec![Ok("brief".to_string())]);
        let outcome = summarize_large_text(&summarizer, &long_text(3000)).await;
        assert_eq!(outcome, SummaryOutcome::Summary("brief".to_string()));
        assert_eq!(summarizer.calls().len(), 1, "no second pass");
    }

    #[tokio::test]
    async fn long_combined_summary_triggers_second_pass() {
        let summarizer = ScriptedSummarizer::new(vec![
            Ok("x".repeat(600)),
            Ok("y".repeat(600)),
            Ok("condensed.".to_string()),
        ]);
        let outcome = summarize_large_text(&summarizer, &long_text(6000)).await;
        assert_eq!(outcome, SummaryOutcome::Summary("condensed.".to_string()));

        let calls = summarizer.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[2].1, SECOND_PASS_PARAMS);
        // Second pass input is the joined first-pass text.
        assert_eq!(calls[2].0, format!("{} {}", "x".repeat(600), "y".repeat(600)));
    }

    #[tokio::test]
    async fn failed_second_pass_keeps_first_pass_result() {
        let first = "x".repeat(600);
        let second = "y".repeat(600);
        let summarizer = ScriptedSummarizer::new(vec![
            Ok(first.clone()),
            Ok(second.clone()),
            Err(SummarizeError::Api {
                status: 500,
                body: "boom".to_string(),
            }),
        ]);
        let outcome = summarize_large_text(&summarizer, &long_text(6000)).await;
        assert_eq!(
            outcome,
            SummaryOutcome::Summary(format!("{first} {second}"))
        );
    }

    #[tokio::test]
    async fn empty_second_pass_keeps_first_pass_result() {
        let first = "x".repeat(1200);
        let summarizer =
            ScriptedSummarizer::new(vec![Ok(first.clone()), Ok(String::new())]);
        let outcome = summarize_large_text(&summarizer, &long_text(3000)).await;
        assert_eq!(outcome, SummaryOutcome::Summary(first));
    }

    #[tokio::test]
    async fn combined_exactly_at_threshold_skips_second_pass() {
        let exactly_1000 = "z".repeat(1000);
        let summarizer = ScriptedSummarizer::new(vec![Ok(exactly_1000.clone())]);
        let outcome = summarize_large_text(&summarizer, &long_text(3000)).await;
        assert_eq!(outcome, SummaryOutcome::Summary(exactly_1000));
        assert_eq!(summarizer.calls().len(), 1);
    }

    #[tokio::test]
    async fn whitespace_padding_does_not_rescue_short_chunk() {
        // 10 visible chars padded with spaces: trimmed length stays < 50.
        let padded = format!("{:^300}", "short text");
        let summarizer = ScriptedSummarizer::new(vec![]);
        assert_eq!(
            summarize_large_text(&summarizer, &padded).await,
            SummaryOutcome::Unavailable
        );
    }

    #[tokio::test]
    async fn chunks_are_trimmed_before_summarization() {
        let text = format!("  {}  ", long_text(100));
        let summarizer = ScriptedSummarizer::new(vec![Ok("s".to_string())]);
        let _ = summarize_large_text(&summarizer, &text).await;
        let calls = summarizer.calls();
        assert_eq!(calls[0].0, long_text(100));
    }
}
