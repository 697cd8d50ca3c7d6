//! Quiz endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use rand::Rng;

use quiz_core::{mask_word, name_matches, words_match};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::quran::Ayah;
use crate::AppState;

/// Verses with at most this many words make unguessable fill-in-the-blank
/// questions and are skipped while longer ones exist in the scope.
const MIN_QUESTION_WORDS: usize = 3;

/// GET /api/quiz/question
pub async fn question(
    State(state): State<AppState>,
    Query(query): Query<QuestionQuery>,
) -> Result<Json<QuestionResponse>> {
    match query.mode {
        QuizMode::Surah => {
            let number = query.surah.ok_or_else(|| {
                ApiError::BadRequest("surah parameter is required for mode=surah".to_string())
            })?;
            if !(1..=114).contains(&number) {
                return Err(ApiError::BadRequest(format!(
                    "surah number must be 1-114, got {}",
                    number
                )));
            }

            let surah = state.quran.surah(number).await?;
            let ayah = pick_ayah(&surah.ayahs)
                .ok_or_else(|| ApiError::NotFound(format!("no ayahs in surah {}", number)))?;
            Ok(Json(QuestionResponse::Word(word_question(
                Some(surah.number),
                ayah,
            )?)))
        }
        QuizMode::Juz => {
            let number = query.juz.ok_or_else(|| {
                ApiError::BadRequest("juz parameter is required for mode=juz".to_string())
            })?;
            if !(1..=30).contains(&number) {
                return Err(ApiError::BadRequest(format!(
                    "juz number must be 1-30, got {}",
                    number
                )));
            }

            let juz = state.quran.juz(number).await?;
            let ayah = pick_ayah(&juz.ayahs)
                .ok_or_else(|| ApiError::NotFound(format!("no ayahs in juz {}", number)))?;
            let surah_number = ayah.surah.as_ref().map(|s| s.number);
            Ok(Json(QuestionResponse::Word(word_question(
                surah_number,
                ayah,
            )?)))
        }
        QuizMode::Whole => {
            let metas = state.quran.surahs().await?;
            if metas.is_empty() {
                return Err(ApiError::NotFound("no surahs available".to_string()));
            }
            let meta = &metas[rand::thread_rng().gen_range(0..metas.len())];

            let surah = state.quran.surah(meta.number).await?;
            let ayah = pick_ayah(&surah.ayahs)
                .ok_or_else(|| ApiError::NotFound(format!("no ayahs in surah {}", meta.number)))?;

            Ok(Json(QuestionResponse::Name(NameQuestion {
                text: ayah.text.clone(),
                surah_number: meta.number,
                english_name: meta.english_name.clone(),
                accepted_names: meta.accepted_names(),
            })))
        }
    }
}

/// POST /api/quiz/check-word
pub async fn check_word(Json(payload): Json<CheckWordRequest>) -> Json<CheckResponse> {
    let correct = words_match(&payload.guess, &payload.answer);
    Json(CheckResponse { correct })
}

/// POST /api/quiz/check-name
pub async fn check_name(Json(payload): Json<CheckNameRequest>) -> Json<CheckResponse> {
    let correct = name_matches(&payload.guess, &payload.accepted_names);
    Json(CheckResponse { correct })
}

/// Mask the picked verse and package it for the client.
fn word_question(surah_number: Option<u32>, ayah: &Ayah) -> Result<WordQuestion> {
    let mask = mask_word(&ayah.text)
        .ok_or_else(|| ApiError::Internal("verse contained no words".to_string()))?;
    Ok(WordQuestion {
        surah_number,
        ayah_number: ayah.number_in_surah,
        mask,
    })
}

/// Pick a random verse, preferring ones long enough to quiz on; very short
/// verses are only used when nothing else exists in the scope.
fn pick_ayah(ayahs: &[Ayah]) -> Option<&Ayah> {
    let candidates: Vec<&Ayah> = ayahs
        .iter()
        .filter(|a| a.text.split_whitespace().count() > MIN_QUESTION_WORDS)
        .collect();
    if candidates.is_empty() {
        if ayahs.is_empty() {
            None
        } else {
            Some(&ayahs[rand::thread_rng().gen_range(0..ayahs.len())])
        }
    } else {
        Some(candidates[rand::thread_rng().gen_range(0..candidates.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ayah(text: &str) -> Ayah {
        Ayah {
            number: 1,
            number_in_surah: Some(1),
            text: text.to_string(),
            surah: None,
        }
    }

    #[test]
    fn pick_ayah_prefers_long_verses() {
        let ayahs = vec![
            ayah("قل هو"),
            ayah("صِرَاطَ الَّذِينَ أَنْعَمْتَ عَلَيْهِمْ غَيْرِ الْمَغْضُوبِ عَلَيْهِمْ"),
        ];
        for _ in 0..20 {
            let picked = pick_ayah(&ayahs).unwrap();
            assert_ne!(picked.text, "قل هو");
        }
    }

    #[test]
    fn pick_ayah_falls_back_to_short_verses() {
        let ayahs = vec![ayah("قل هو")];
        assert_eq!(pick_ayah(&ayahs).unwrap().text, "قل هو");
    }

    #[test]
    fn pick_ayah_handles_empty_scope() {
        assert!(pick_ayah(&[]).is_none());
    }

    #[test]
    fn word_question_carries_the_mask() {
        let verse = ayah("بِسْمِ اللَّهِ الرَّحْمَنِ الرَّحِيمِ");
        let question = word_question(Some(1), &verse).unwrap();
        assert_eq!(question.surah_number, Some(1));
        assert_eq!(question.ayah_number, Some(1));
        assert_eq!(
            question.mask.masked_text.matches(MASK_PLACEHOLDER).count(),
            1
        );
        assert!(!question.mask.answer_word.is_empty());
    }
}
