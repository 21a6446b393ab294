//! Rendering helpers for stored text. Post content is kept verbatim in the
//! store; pages pass it through `sanitize_content` before display.

/// Sanitize post markup using ammonia
pub fn sanitize_content(html: &str) -> String {
    ammonia::clean(html)
}

/// Shorten `text` to at most `max_chars` characters, appending `...` when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}
