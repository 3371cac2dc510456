//! # recap-transcription
//!
//! Speech-to-text for uploaded audio. The HTTP layer depends on the
//! [`Transcriber`] trait rather than a concrete engine, so request handling
//! stays decoupled from inference. The shipped implementation,
//! [`SidecarTranscriber`], POSTs the audio as multipart to a sidecar
//! service's `/transcribe` endpoint and reads the transcript out of its JSON
//! response.
//!
//! ## Crate Position
//!
//! Standalone (no recap crate dependencies). Depended on by: recap-server.

#![deny(unsafe_code)]

pub mod sidecar;
pub mod types;

pub use sidecar::SidecarTranscriber;
pub use types::{ResultExt, Transcriber, Transcript, TranscriptionError};
