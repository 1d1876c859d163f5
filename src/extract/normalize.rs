//! Whitespace flattening for entry chunks.

/// Trim `chunk` and collapse every run of whitespace (spaces, tabs, line
/// breaks) into a single space.
///
/// Page-layout reconstruction breaks long entries across lines; flattening
/// puts each entry back on one line. Whitespace-only input yields `""`.
pub fn normalize(chunk: &str) -> String {
    let mut out = String::with_capacity(chunk.len());
    for word in chunk.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
