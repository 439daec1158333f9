//! Interpolation placeholder extraction.
//!
//! Placeholders are written `{name}`. Each `{...}` pair is matched
//! independently and non-greedily, so nested braces are not supported:
//! `{a{b}c}` yields `a{b`.

use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{(.*?)\}").unwrap());

/// Extract placeholder names in order of appearance, duplicates included.
pub fn extract_placeholders(text: &str) -> Vec<&str> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .collect()
}
