//! Core quiz library shared by the backend and any future client.
//!
//! Provides:
//! - Arabic diacritic stripping and letter-shape normalization
//! - Variation generation for lenient answer comparison
//! - Word matching and surah-name matching for typed answers
//! - Ayah masking for fill-in-the-blank questions
//!
//! Everything here is a pure function over plain strings. The callers own
//! all I/O, state, and randomness beyond the injectable token picker.

pub mod masking;
pub mod matching;
pub mod text;
pub mod variations;

pub use masking::{
    mask_word, mask_word_with, MaskResult, RandomPicker, TokenPicker, MASK_PLACEHOLDER,
};
pub use matching::{name_matches, words_match};
pub use text::{normalize, strip_diacritics};
pub use variations::{clean_word, trim_punctuation, variations};
