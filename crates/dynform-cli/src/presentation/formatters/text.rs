/// Shorten `text` to at most `max_len` characters, ellipsis included
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Keep the first `keep` characters and mark the cut with `...`
pub fn clip(text: &str, keep: usize) -> String {
    if text.chars().count() <= keep {
        text.to_string()
    } else {
        let kept: String = text.chars().take(keep).collect();
        format!("{}...", kept)
    }
}

/// Collapse line breaks so multi-line values fit on one row
pub fn single_line(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}
