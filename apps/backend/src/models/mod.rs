//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from quiz-core
pub use quiz_core::{MaskResult, MASK_PLACEHOLDER};

use crate::services::quran::SurahMeta;

/// Quiz flow selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
    Surah,
    Juz,
    Whole,
}

/// Query parameters for `GET /api/quiz/question`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionQuery {
    pub mode: QuizMode,
    pub surah: Option<u32>,
    pub juz: Option<u32>,
}

/// Surah list entry for the mode-selection screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurahSummary {
    pub number: u32,
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub number_of_ayahs: u32,
}

impl SurahSummary {
    /// Convert from the upstream surah record.
    pub fn from_meta(meta: SurahMeta) -> Self {
        Self {
            number: meta.number,
            name: meta.name,
            english_name: meta.english_name,
            english_name_translation: meta.english_name_translation,
            number_of_ayahs: meta.number_of_ayahs,
        }
    }
}

/// Response body for `GET /api/surahs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurahListResponse {
    pub surahs: Vec<SurahSummary>,
}

/// Response body for `GET /api/quiz/question`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionResponse {
    Word(WordQuestion),
    Name(NameQuestion),
}

/// Fill-in-the-blank question (surah and juz modes). The answer rides
/// along because the server holds no quiz state; the client keeps it and
/// submits the guess together with it for checking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordQuestion {
    pub surah_number: Option<u32>,
    pub ayah_number: Option<u32>,
    #[serde(flatten)]
    pub mask: MaskResult,
}

/// Name-the-surah question (whole-Quran mode): the full verse is shown
/// and the guess is checked against the accepted names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameQuestion {
    pub text: String,
    pub surah_number: u32,
    pub english_name: String,
    pub accepted_names: Vec<String>,
}

/// Request body for `POST /api/quiz/check-word`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckWordRequest {
    pub guess: String,
    pub answer: String,
}

/// Request body for `POST /api/quiz/check-name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckNameRequest {
    pub guess: String,
    pub accepted_names: Vec<String>,
}

/// Response body for both check endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    pub correct: bool,
}
