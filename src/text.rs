//! Text normalization and word-boundary matching

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize raw text for comparison.
///
/// Applies, in order: trim, lowercase, NFD decomposition with combining-mark
/// stripping ("è" → "e"), typographic-apostrophe unification, whitespace
/// collapse. Empty or whitespace-only input yields the empty string.
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(value: &str) -> String {
    let s = value.trim().to_lowercase();
    if s.is_empty() {
        return String::new();
    }

    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            // Curly/modifier apostrophes → plain ASCII apostrophe
            '\u{2018}' | '\u{2019}' | '\u{02BC}' => '\'',
            c => c,
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whole-word, case-insensitive occurrence of `needle` inside `haystack`.
///
/// The needle is regex-escaped before the boundary pattern is built, so
/// candidate text containing metacharacters can never produce an invalid
/// pattern. An empty needle never matches; a pattern-construction failure
/// degrades to `false` rather than aborting the caller's scoring loop.
pub fn contains_word(needle: &str, haystack: &str) -> bool {
    let n = needle.trim();
    if n.is_empty() {
        return false;
    }

    let pattern = format!(r"(?i)\b{}\b", regex::escape(n));
    Regex::new(&pattern)
        .map(|re| re.is_match(haystack))
        .unwrap_or(false)
}
