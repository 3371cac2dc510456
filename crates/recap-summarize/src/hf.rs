//! Hugging Face inference-protocol summarization client.
//!
//! Speaks the wire contract of the `transformers` summarization pipeline:
//!
//! ```text
//! POST {base_url}/models/{model}
//! {"inputs": "...", "parameters": {"max_length": 200, "min_length": 30, "do_sample": false}}
//! → [{"summary_text": "..."}]
//! ```
//!
//! Works against the hosted inference API (with a bearer token) or any
//! self-hosted endpoint speaking the same protocol.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::provider::{SummarizeError, SummarizeParams, Summarizer};

/// Configuration for [`HfSummarizer`].
#[derive(Debug, Clone)]
pub struct HfSummarizerConfig {
    /// Endpoint base URL, without a trailing slash.
    pub base_url: String,
    /// Model identifier, e.g. `facebook/bart-large-cnn`.
    pub model: String,
    /// Optional bearer token for hosted endpoints.
    pub api_token: Option<String>,
}

#[derive(Serialize)]
struct HfRequest<'a> {
    inputs: &'a str,
    parameters: HfParameters,
}

#[derive(Serialize)]
struct HfParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
}

#[derive(Deserialize)]
struct HfSummary {
    summary_text: Option<String>,
}

/// Summarizer backed by a Hugging Face inference-protocol endpoint.
pub struct HfSummarizer {
    config: HfSummarizerConfig,
    client: reqwest::Client,
}

impl HfSummarizer {
    /// Create a new client.
    #[must_use]
    pub fn new(config: HfSummarizerConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Create a new client sharing an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(mut config: HfSummarizerConfig, client: reqwest::Client) -> Self {
        while config.base_url.ends_with('/') {
            let _ = config.base_url.pop();
        }
        Self { config, client }
    }

    /// Build request headers: bearer auth when a token is configured.
    fn build_headers(&self) -> Result<HeaderMap, SummarizeError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.config.api_token {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
                SummarizeError::Http(format!("invalid api token header: {e}"))
            })?;
            let _ = headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl Summarizer for HfSummarizer {
    #[instrument(skip(self, text), fields(model = %self.config.model, chars = text.len()))]
    async fn summarize(
        &self,
        text: &str,
        params: SummarizeParams,
    ) -> Result<String, SummarizeError> {
        let request = HfRequest {
            inputs: text,
            parameters: HfParameters {
                max_length: params.max_length,
                min_length: params.min_length,
                do_sample: false,
            },
        };

        let url = format!("{}/models/{}", self.config.base_url, self.config.model);
        let response = self
            .client
            .post(url)
            .headers(self.build_headers()?)
            .json(&request)
            .send()
            .await
            .map_err(|e| SummarizeError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizeError::Api { status, body });
        }

        let summaries: Vec<HfSummary> = response
            .json()
            .await
            .map_err(|e| SummarizeError::MalformedResponse(format!("parse json body: {e}")))?;

        let summary = summaries
            .into_iter()
            .next()
            .and_then(|s| s.summary_text)
            .ok_or_else(|| {
                SummarizeError::MalformedResponse("missing `summary_text` field".to_string())
            })?;

        if summary.is_empty() {
            return Err(SummarizeError::EmptySummary);
        }
        debug!(chars = summary.len(), "summary received");
        Ok(summary)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
