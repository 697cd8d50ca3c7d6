//! Common test utilities for integration tests.
//!
//! Tests run fully offline: a stand-in for the alquran.cloud API serves
//! fixture data on an ephemeral local port, and the application router is
//! built against it.

pub mod fixtures;

use std::sync::Arc;

use axum::{extract::Path, routing::get, Json, Router};
use serde_json::Value;

use quran_quiz_backend::services::quran::QuranClient;
use quran_quiz_backend::{router, AppState};

/// Test context wiring the app to a fixture verse source.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Start the fixture upstream and build the app router against it.
    pub async fn new() -> Self {
        let base_url = spawn_fixture_api().await;
        let quran = QuranClient::new(&base_url).expect("failed to build quran client");
        let state = AppState {
            quran: Arc::new(quran),
        };
        Self { app: router(state) }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}

/// Serve fixture responses in the alquran.cloud envelope format and
/// return the base URL to point the client at.
async fn spawn_fixture_api() -> String {
    let app = Router::new()
        .route("/v1/surah", get(|| async { Json(fixtures::surah_list()) }))
        .route("/v1/surah/{number}/{edition}", get(surah))
        .route("/v1/juz/{number}/{edition}", get(juz));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind fixture listener");
    let addr = listener.local_addr().expect("fixture listener has no addr");
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("fixture server failed");
    });

    format!("http://{}/v1", addr)
}

async fn surah(Path((number, _edition)): Path<(u32, String)>) -> Json<Value> {
    Json(fixtures::surah(number))
}

async fn juz(Path((number, _edition)): Path<(u32, String)>) -> Json<Value> {
    Json(fixtures::juz(number))
}
