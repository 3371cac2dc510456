//! Fixed-size character-offset chunking.
//!
//! The summarization model accepts a bounded input window, so documents are
//! sliced into consecutive runs of at most `max_chars` characters. Boundaries
//! are raw character offsets — a chunk may split mid-word — but slices are
//! always made at char boundaries so no UTF-8 code point is ever split.

/// Default chunk size in characters.
pub const DEFAULT_MAX_CHARS: usize = 3000;

/// Split `text` into ordered, non-overlapping chunks of at most `max_chars`
/// characters.
///
/// The chunks cover `text` exactly once in original order; the last chunk may
/// be shorter. Empty input yields no chunks. A `max_chars` of zero is treated
/// as one so the function stays total.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_chunk = 0;
    for (offset, _) in text.char_indices() {
        if in_chunk == max_chars {
            chunks.push(&text[start..offset]);
            start = offset;
            in_chunk = 0;
        }
        in_chunk += 1;
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
