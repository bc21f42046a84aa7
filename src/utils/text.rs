/// Cut `s` to at most `max_chars` characters, marking the cut with `...`.
/// Counts chars, so multi-byte text never splits mid-character.
#[must_use]
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", s[..idx].trim_end()),
        None => s.to_string(),
    }
}

/// Collapse runs of whitespace (newlines included) to single spaces, for
/// one-line display of wikitext snippets.
#[must_use]
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
