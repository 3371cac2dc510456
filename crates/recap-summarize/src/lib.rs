//! # recap-summarize
//!
//! Abstractive summarization for large documents.
//!
//! - [`provider`] — the [`Summarizer`] trait seam and its error type.
//! - [`hf`] — [`HfSummarizer`], a client for Hugging Face
//!   inference-protocol endpoints (the wire contract of the
//!   `transformers` summarization pipeline).
//! - [`pipeline`] — [`pipeline::summarize_large_text`], hierarchical
//!   chunked summarization: one pass per chunk, an optional second pass
//!   over the concatenation, and a soft-failure outcome when nothing could
//!   be summarized.
//!
//! ## Crate Position
//!
//! Depends on recap-core. Depended on by: recap-server.

#![deny(unsafe_code)]

pub mod hf;
pub mod pipeline;
pub mod provider;

pub use hf::{HfSummarizer, HfSummarizerConfig};
pub use pipeline::{SummaryOutcome, summarize_large_text};
pub use provider::{SummarizeError, SummarizeParams, Summarizer};
