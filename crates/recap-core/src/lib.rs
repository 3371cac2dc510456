//! # recap-core
//!
//! Foundation text utilities shared by the recap crates:
//!
//! - **Normalization**: [`text::normalize`] — obfuscated-email fixup and
//!   global lowercasing applied to every extracted document.
//! - **Chunking**: [`chunk::chunk_text`] — fixed-size character-offset
//!   slicing used to fit documents into the summarization model's input
//!   window.
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by recap-summarize and recap-server.

#![deny(unsafe_code)]

pub mod chunk;
pub mod text;
