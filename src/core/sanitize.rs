// src/core/sanitize.rs

/// Trim surrounding whitespace, then cut at the first ASCII space.
/// `"東京大学 本部"` → `"東京大学"`. Other inner whitespace (`\n`, NBSP,
/// U+3000) does not split. `None` for blank input.
pub fn first_token(s: &str) -> Option<&str> {
    s.trim().split(' ').next().filter(|t| !t.is_empty())
}

pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    text.contains(keyword)
}
