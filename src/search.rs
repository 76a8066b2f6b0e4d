//! Word extraction and collation helpers for catalog search.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// A word is a maximal run of alphanumeric/underscore characters.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Lower-cased search words of length > 1 extracted from free text.
pub fn search_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|w| w.chars().count() > 1)
        .collect()
}

/// A search is usable only if it yields at least one word of length > 1.
pub fn has_usable_word(text: &str) -> bool {
    WORD_RE
        .find_iter(text)
        .any(|m| m.as_str().chars().count() > 1)
}

/// Collation key: lower-cased with diacritics stripped (NFD, combining
/// marks dropped), so "Éloge" and "eloge" collate together.
pub fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Locale-insensitive title ordering: folded keys first, raw text as a
/// deterministic tie-breaker.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}
