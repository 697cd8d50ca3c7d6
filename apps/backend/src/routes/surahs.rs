//! Surah listing endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::{SurahListResponse, SurahSummary};
use crate::AppState;

/// GET /api/surahs
pub async fn list(State(state): State<AppState>) -> Result<Json<SurahListResponse>> {
    let surahs = state.quran.surahs().await?;
    Ok(Json(SurahListResponse {
        surahs: surahs.into_iter().map(SurahSummary::from_meta).collect(),
    }))
}
