// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{routing::post, Json, Router};
use fishlog::config::Config;
use fishlog::db::LocalDb;
use fishlog::routes::create_router;
use fishlog::services::{
    CatchService, LiveAnalyzer, RecognitionClient, SocialService, SpotService,
};
use fishlog::AppState;
use std::sync::Arc;

/// A recognition endpoint URL that refuses connections immediately.
#[allow(dead_code)]
pub const UNREACHABLE_RECOGNITION_URL: &str = "http://127.0.0.1:9/unreachable";

/// Create a test app with an in-memory store and the real spot catalogue.
///
/// Recognition points at `recognition_url`; pass
/// [`UNREACHABLE_RECOGNITION_URL`] for tests that never identify.
#[allow(dead_code)]
pub fn create_test_app(recognition_url: &str) -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let db = LocalDb::new_in_memory();
    let spots = SpotService::load_from_file("data/fishing_spots.json")
        .expect("Failed to load spot catalogue - is data/ committed?");

    let recognition = RecognitionClient::new(recognition_url.to_string());
    let live = LiveAnalyzer::new(recognition.clone());
    let catches = CatchService::new(db.clone());
    let social = SocialService::with_demo_data();

    let state = Arc::new(AppState {
        config,
        db,
        spots,
        recognition,
        catches,
        live,
        social,
    });

    (create_router(state.clone()), state)
}

/// Spawn an in-process stub of the recognition endpoint that answers
/// every request with the given completion text. Returns its URL.
#[allow(dead_code)]
pub async fn spawn_recognition_stub(completion: &str) -> String {
    let completion = completion.to_string();
    let app = Router::new().route(
        "/",
        post(move || {
            let completion = completion.clone();
            async move { Json(serde_json::json!({ "completion": completion })) }
        }),
    );

    serve_stub(app).await
}

/// Spawn a stub recognition endpoint that always returns HTTP 500.
#[allow(dead_code)]
pub async fn spawn_failing_recognition_stub() -> String {
    let app = Router::new().route(
        "/",
        post(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "upstream down") }),
    );

    serve_stub(app).await
}

async fn serve_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("stub has a local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub serve failed");
    });

    format!("http://{}/", addr)
}

/// Collect a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not valid JSON")
}
