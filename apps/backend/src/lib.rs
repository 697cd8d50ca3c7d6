pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::services::quran::{QuranClient, DEFAULT_API_URL};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub quran: Arc<QuranClient>,
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_url = std::env::var("QURAN_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

    tracing::info!("Using verse source at {}", api_url);
    let quran = QuranClient::new(&api_url)?;

    let state = AppState {
        quran: Arc::new(quran),
    };

    let app = router(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/surahs", get(routes::surahs::list))
        .route("/api/quiz/question", get(routes::quiz::question))
        .route("/api/quiz/check-word", post(routes::quiz::check_word))
        .route("/api/quiz/check-name", post(routes::quiz::check_name))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
