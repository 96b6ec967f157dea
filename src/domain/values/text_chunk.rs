//! Overlapping character windows used to index long filings.

pub const DEFAULT_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 500;

/// Splits `text` into windows of at most `chunk_size` characters, each
/// starting `chunk_size - overlap` characters after the previous one.
///
/// A window that does not reach the end of the text is cut back to its last
/// whitespace, provided that whitespace lies in the second half of the
/// window. Chunks are trimmed and blank chunks dropped.
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
    let chunk_size = chunk_size.max(1);
    let step = chunk_size.saturating_sub(overlap).max(1);
    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let mut end = (start + chunk_size).min(chars.len());
        if end < chars.len() {
            let half = (start + chunk_size / 2).max(start + 1);
            if let Some(ws) = (half..end).rev().find(|&i| chars[i].is_whitespace()) {
                end = ws;
            }
        }

        let chunk: String = chars[start..end].iter().collect();
        let chunk = chunk.trim();
        if !chunk.is_empty() {
            chunks.push(chunk.to_string());
        }

        if end >= chars.len() {
            break;
        }
        // Never skip text that a whitespace cut left out of this window.
        start = (start + step).min(end);
    }
    chunks
}

/// Lowercased alphanumeric terms of at least three characters.
pub fn terms(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 3)
        .map(|t| t.to_lowercase())
        .collect()
}
