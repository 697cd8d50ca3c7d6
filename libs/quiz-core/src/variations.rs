//! Variation generation for lenient answer comparison.
//!
//! A typed answer can reasonably differ from the verse text in diacritics,
//! letter shape, case (for transliterated names), and stray punctuation.
//! Instead of betting on one canonical form, each word expands into the
//! small set of forms a correct answer could take, and matching intersects
//! those sets.

use crate::text::{normalize, strip_diacritics};

/// Punctuation and quote characters that never carry answer meaning.
/// Covers Latin and Arabic marks plus the ornate parentheses used around
/// ayah ornaments.
const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '\'', '-', '(', ')', '[', ']', '«', '»', '،', '؛', '؟',
    '۔', '\u{FD3E}', '\u{FD3F}',
];

/// Remove every punctuation/quote character from `word`.
pub fn clean_word(word: &str) -> String {
    word.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}

/// Strip punctuation from the edges of a token, keeping interior marks.
pub fn trim_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| PUNCTUATION.contains(&c))
}

/// Generate the comparable forms of `word`: the cleaned original, its
/// diacritic-stripped form, its fully normalized form, then the lowercase
/// of each of those three, de-duplicated preserving first-seen order.
///
/// Empty or punctuation-only input yields an empty vector, never a vector
/// containing the empty string.
pub fn variations(word: &str) -> Vec<String> {
    let cleaned = clean_word(word);
    if cleaned.trim().is_empty() {
        return Vec::new();
    }

    let stripped = strip_diacritics(&cleaned);
    let normalized = normalize(&cleaned);

    let mut forms: Vec<String> = Vec::with_capacity(6);
    for candidate in [
        cleaned.clone(),
        stripped.clone(),
        normalized.clone(),
        cleaned.to_lowercase(),
        stripped.to_lowercase(),
        normalized.to_lowercase(),
    ] {
        if !candidate.is_empty() && !forms.contains(&candidate) {
            forms.push(candidate);
        }
    }
    forms
}
