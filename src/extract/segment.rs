//! Splitting the aggregated document text into per-course chunks.

use regex::Regex;

/// Lines that open a course entry: a course code at the start of a line,
/// followed by at least one whitespace character.
pub const ENTRY_START_PATTERN: &str = r"(?m)^[A-Z]{2,3}\d{3,4}\s+";

/// Split `text` immediately before every entry start.
///
/// The course code stays at the head of the chunk that follows the split.
/// Text before the first entry start (the transcript header) is returned as
/// the first chunk when it is non-empty; it is up to the parser to reject it.
pub fn segment<'t>(text: &'t str, entry_start: &Regex) -> Vec<&'t str> {
    let mut chunks = Vec::new();
    let mut start = 0usize;

    for m in entry_start.find_iter(text) {
        if m.start() > start {
            chunks.push(&text[start..m.start()]);
        }
        start = m.start();
    }

    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}
