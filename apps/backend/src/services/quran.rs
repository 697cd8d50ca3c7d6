//! Client for the alquran.cloud verse API.
//!
//! The quiz core only ever sees plain verse strings; this module owns the
//! network boundary, the upstream envelope format, and nothing else. No
//! response caching and no retries; a failed fetch surfaces as a
//! retryable error to the client.

use serde::Deserialize;

/// Default upstream base URL; override with the `QURAN_API_URL` env var.
pub const DEFAULT_API_URL: &str = "http://api.alquran.cloud/v1";

/// Text edition requested for every verse fetch.
const EDITION: &str = "quran-uthmani";

/// Every alquran.cloud response wraps its payload in this envelope.
#[derive(Debug, Clone, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Surah record as returned by `GET /surah` (metadata, no verses).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahMeta {
    pub number: u32,
    pub name: String,
    pub english_name: String,
    #[serde(default)]
    pub english_name_translation: String,
    #[serde(default)]
    pub number_of_ayahs: u32,
}

impl SurahMeta {
    /// The names a guess is checked against in whole-Quran mode: English
    /// name, Arabic name, and the surah number as typed digits.
    pub fn accepted_names(&self) -> Vec<String> {
        vec![
            self.english_name.clone(),
            self.name.clone(),
            self.number.to_string(),
        ]
    }
}

/// Surah with its verses, from `GET /surah/{n}/{edition}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    pub number: u32,
    pub name: String,
    pub english_name: String,
    #[serde(default)]
    pub english_name_translation: String,
    pub ayahs: Vec<Ayah>,
}

/// Juz with its verses, from `GET /juz/{n}/{edition}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Juz {
    pub number: u32,
    pub ayahs: Vec<Ayah>,
}

/// A single verse. The `surah` reference is present in juz responses,
/// where verses span several surahs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ayah {
    pub number: u32,
    #[serde(default)]
    pub number_in_surah: Option<u32>,
    pub text: String,
    #[serde(default)]
    pub surah: Option<SurahRef>,
}

/// Minimal surah reference embedded in juz verses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahRef {
    pub number: u32,
    pub name: String,
    pub english_name: String,
}

/// HTTP client for the verse API.
#[derive(Debug, Clone)]
pub struct QuranClient {
    http: reqwest::Client,
    base_url: String,
}

impl QuranClient {
    /// Build a client against `base_url` (no trailing slash required).
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("quran-quiz-backend/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the surah list (metadata only).
    pub async fn surahs(&self) -> Result<Vec<SurahMeta>, reqwest::Error> {
        let url = format!("{}/surah", self.base_url);
        tracing::debug!("fetching surah list from {}", url);
        let envelope: Envelope<Vec<SurahMeta>> = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(envelope.data)
    }

    /// Fetch one surah with all its verses.
    pub async fn surah(&self, number: u32) -> Result<Surah, reqwest::Error> {
        let url = format!("{}/surah/{}/{}", self.base_url, number, EDITION);
        tracing::debug!("fetching surah {} from {}", number, url);
        let envelope: Envelope<Surah> = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(envelope.data)
    }

    /// Fetch one juz with all its verses.
    pub async fn juz(&self, number: u32) -> Result<Juz, reqwest::Error> {
        let url = format!("{}/juz/{}/{}", self.base_url, number, EDITION);
        tracing::debug!("fetching juz {} from {}", number, url);
        let envelope: Envelope<Juz> = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(envelope.data)
    }
}
