//! Arabic text preparation for answer comparison.
//!
//! Quranic verse text arrives fully vocalized (tashkeel plus Qur'anic
//! annotation signs) while answers are typed casually, usually bare, and
//! with letter shapes interchanged freely (أ for ا, ى for ي, ة for ه).
//! Comparison therefore runs on stripped and normalized forms rather than
//! on the raw script.

use unicode_normalization::UnicodeNormalization;

/// Combining marks removed by [`strip_diacritics`]: the harakat/tanwin
/// block (U+064B..U+065F), superscript alef (U+0670), the Qur'anic
/// annotation range (U+06D6..U+06ED), and the zero-width joiner controls.
#[inline]
fn is_diacritic(c: char) -> bool {
    matches!(c,
        '\u{064B}'..='\u{065F}'
        | '\u{0670}'
        | '\u{06D6}'..='\u{06ED}'
        | '\u{200C}'
        | '\u{200D}')
}

/// Remove Arabic vocalization marks from `text`.
///
/// The input is NFD-decomposed first, so hamza-carrying letters (أ إ آ ؤ ئ)
/// split into base letter plus combining hamza and the mark goes with the
/// rest. Whitespace is left untouched; callers that need it collapsed do
/// that separately.
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_diacritic(*c)).collect()
}

/// Fold letter shapes that casual typing treats as interchangeable.
fn fold_letter(c: char) -> char {
    match c {
        // alif with hamza above/below, alif madda, and the wasla the
        // Uthmani text uses, all to bare alif
        '\u{0623}' | '\u{0625}' | '\u{0622}' | '\u{0671}' => '\u{0627}',
        // alif maksura to dotted ya
        '\u{0649}' => '\u{064A}',
        // hamza carriers to bare hamza
        '\u{0624}' | '\u{0626}' => '\u{0621}',
        // ta marbuta to ha
        '\u{0629}' => '\u{0647}',
        _ => c,
    }
}

/// Normalize `text` for comparison: strip diacritics, fold interchangeable
/// letter shapes, collapse whitespace runs to single spaces and trim.
pub fn normalize(text: &str) -> String {
    let folded: String = strip_diacritics(text).chars().map(fold_letter).collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}
