/// Default maximum characters submitted to the summarization model per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Splits `text` into consecutive chunks of at most `max_chars` characters.
///
/// The budget is a character count, not a token count, and chunks never
/// overlap. Boundaries always land on `char` boundaries, so multi-byte text
/// is never split mid-codepoint and concatenating the returned slices
/// reproduces `text` exactly. A zero `max_chars` is treated as one.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let split = rest
            .char_indices()
            .nth(max_chars)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(split);
        chunks.push(chunk);
        rest = tail;
    }

    chunks
}
