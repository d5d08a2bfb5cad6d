//! Shared helpers for channel implementations.

/// Split a long message into chunks of at most `max_len` bytes.
///
/// Prefers breaking after a newline; never splits inside a UTF-8 character.
pub fn split_message(text: &str, max_len: usize) -> Vec<&str> {
    if text.len() <= max_len || max_len == 0 {
        return vec![text];
    }

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < text.len() {
        let mut end = (start + max_len).min(text.len());
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        if end == start {
            // max_len is smaller than this character; emit it whole.
            end = start + text[start..].chars().next().map_or(1, char::len_utf8);
        }
        let break_at = if end < text.len() {
            text[start..end]
                .rfind('\n')
                .map(|i| start + i + 1)
                .unwrap_or(end)
        } else {
            end
        };
        chunks.push(&text[start..break_at]);
        start = break_at;
    }

    chunks
}
