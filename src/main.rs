// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! FishLog API Server
//!
//! Backend for the FishLog mobile app: identifies fish from captured
//! photos via an AI endpoint, keeps the local catch log and profile,
//! serves nearby fishing spots, and hosts the social feed.

use fishlog::{
    config::Config,
    db::LocalDb,
    services::{CatchService, LiveAnalyzer, RecognitionClient, SocialService, SpotService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting FishLog API");

    // Open the local stores (profile + saved catches)
    let db = LocalDb::open(&config.storage_dir)
        .await
        .expect("Failed to open local store");

    // Load the spot catalogue
    tracing::info!(path = %config.spots_path, "Loading spot catalogue");
    let spots =
        SpotService::load_from_file(&config.spots_path).expect("Failed to load spot catalogue");
    tracing::info!(count = spots.spots().len(), "Spot catalogue loaded");

    // Initialize the recognition client and the services built on it
    let recognition = RecognitionClient::new(config.recognition_url.clone());
    let live = LiveAnalyzer::new(recognition.clone());
    let catches = CatchService::new(db.clone());
    let social = SocialService::with_demo_data();

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        spots,
        recognition,
        catches,
        live,
        social,
    });

    // Build router
    let app = fishlog::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fishlog=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
