// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! FishLog: identify fish from photos, log catches, share them
//!
//! This crate provides the backend API for the FishLog mobile app:
//! AI-powered species identification, a local catch log, nearby fishing
//! spot discovery, and a social feed with a leaderboard.

pub mod config;
pub mod db;
pub mod error;
pub mod geo;
pub mod ids;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::LocalDb;
use services::{CatchService, LiveAnalyzer, RecognitionClient, SocialService, SpotService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: LocalDb,
    pub spots: SpotService,
    pub recognition: RecognitionClient,
    pub catches: CatchService,
    pub live: LiveAnalyzer,
    pub social: SocialService,
}
