//! Ayah masking for fill-in-the-blank questions.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::text::normalize;
use crate::variations::{trim_punctuation, variations};

/// Placeholder substituted for the masked token. The renderer recognizes
/// it and draws an inline input in its place.
pub const MASK_PLACEHOLDER: &str = "____";

/// Tokens whose edge-stripped length is below this never get masked while
/// longer tokens exist; connective particles and single letters make
/// unguessable questions.
const MIN_MASKABLE_CHARS: usize = 3;

/// Uniform random index source, injectable so tests can pin the choice.
pub trait TokenPicker {
    /// Pick an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Production picker backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl TokenPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// One masked quiz question derived from a verse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskResult {
    /// Verse text with exactly one [`MASK_PLACEHOLDER`] substituted.
    pub masked_text: String,
    /// Text before the placeholder (may be empty).
    pub before: String,
    /// Text after the placeholder (may be empty).
    pub after: String,
    /// The hidden word, edge punctuation stripped.
    pub answer_word: String,
    /// Comparable forms of the answer.
    pub answer_variations: Vec<String>,
    /// Char count of the normalized answer. Sizes the typing field so an
    /// answer typed without diacritics still fits.
    pub answer_display_length: usize,
}

/// Mask a random eligible word in `text` using the thread-local RNG.
pub fn mask_word(text: &str) -> Option<MaskResult> {
    mask_word_with(text, &mut RandomPicker)
}

/// Mask a random eligible word in `text`, choosing with `picker`.
///
/// The verse is whitespace-normalized (newlines become spaces, runs
/// collapse) and split into tokens. Tokens shorter than three characters
/// after edge-punctuation stripping are skipped; when nothing qualifies
/// the whole token list is used instead. Returns `None` only for input
/// with no tokens at all; callers that want guessable questions filter
/// out very short verses before asking.
pub fn mask_word_with<P: TokenPicker>(text: &str, picker: &mut P) -> Option<MaskResult> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    let eligible: Vec<usize> = (0..tokens.len())
        .filter(|&i| trim_punctuation(tokens[i]).chars().count() >= MIN_MASKABLE_CHARS)
        .collect();
    let pool = if eligible.is_empty() {
        (0..tokens.len()).collect()
    } else {
        eligible
    };

    let chosen = tokens[pool[picker.pick(pool.len())]];
    let answer_word = trim_punctuation(chosen).to_string();
    let answer_variations = variations(&answer_word);
    let answer_display_length = normalize(&answer_word).chars().count();

    // The first occurrence of the chosen token is the one replaced, even
    // when the verse repeats it.
    let first = tokens.iter().position(|t| *t == chosen)?;
    let before = tokens[..first].join(" ");
    let after = tokens[first + 1..].join(" ");

    let mut masked = tokens;
    masked[first] = MASK_PLACEHOLDER;
    let masked_text = masked.join(" ");

    Some(MaskResult {
        masked_text,
        before,
        after,
        answer_word,
        answer_variations,
        answer_display_length,
    })
}
