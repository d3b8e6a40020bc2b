//! # Text Chunking Module
//!
//! Splits extracted page text into word-bounded chunks sized for the
//! embedding model. The split is purely positional: words are maximal runs
//! of non-whitespace characters, grouped in document order into chunks of
//! at most `chunk_size` words. The final chunk holds the remainder.
//!
//! Chunking is deterministic and lossless at the word level: joining the
//! chunks' words back together reproduces the whitespace-normalized word
//! sequence of the input.

use tracing::debug;

/// Split text into chunks of at most `chunk_size` words.
///
/// Consecutive whitespace collapses; every chunk except possibly the last
/// holds exactly `chunk_size` words. Empty or whitespace-only text yields a
/// single empty chunk so that callers always see at least one chunk per
/// document.
///
/// # Arguments
///
/// * `text` - The text to split
/// * `chunk_size` - Maximum words per chunk; must be greater than zero
///
/// # Returns
///
/// The ordered chunks
pub fn chunk_text(text: &str, chunk_size: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return vec![String::new()];
    }

    let chunks: Vec<String> = words
        .chunks(chunk_size)
        .map(|group| group.join(" "))
        .collect();

    debug!(
        words = words.len(),
        chunk_size,
        chunks = chunks.len(),
        "chunked text"
    );
    chunks
}
