//! Helpers for bounding error text that leaves the process.

/// Maximum number of characters of underlying error text included in any
/// client-facing diagnostic (inquiry 500 responses and the `/test` snapshot).
pub const MAX_ERROR_DETAIL_CHARS: usize = 50;

/// Return at most `max_chars` characters of `text`.
///
/// Counts Unicode scalar values, so the cut never lands inside a multi-byte
/// character.
pub fn truncate_detail(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
