//! Document normalization.
//!
//! Transcripts and chat exports frequently arrive with spoken-out email
//! addresses (`john.at.example.com`). Normalization rewrites those back to
//! `john@example.com` and lowercases the whole document. Lowercasing is
//! global on purpose: downstream summarization is case-insensitive and the
//! original service behaved this way.

use std::sync::LazyLock;

use regex::Regex;

/// Obfuscated email pattern: a local part of word/dot/hyphen characters,
/// the literal separator `.at.`, and a domain ending in a 2+ letter segment.
static OBFUSCATED_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\w.-]+)\.at\.([\w.-]+\.[A-Za-z]{2,})").expect("email pattern is valid")
});

/// Normalize raw document text.
///
/// Rewrites `local.at.domain.tld` to `local@domain.tld` everywhere, then
/// lowercases the result. Idempotent: a rewritten address contains an `@`
/// and can never match the pattern again.
pub fn normalize(text: &str) -> String {
    OBFUSCATED_EMAIL.replace_all(text, "$1@$2").to_lowercase()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
