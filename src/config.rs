//! Application configuration loaded from environment variables.
//!
//! Every setting has a development default, so a bare `cargo run` serves
//! the app against the hosted recognition endpoint with a local store.

use std::env;

/// Default URL of the vision-language inference endpoint.
const DEFAULT_RECOGNITION_URL: &str = "https://toolkit.rork.com/text/llm/";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the AI recognition endpoint
    pub recognition_url: String,
    /// App URL allowed by CORS (Expo dev server in development)
    pub frontend_url: String,
    /// Directory holding the persisted JSON stores
    pub storage_dir: String,
    /// Path to the fishing spot catalogue
    pub spots_path: String,
    /// Server port
    pub port: u16,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            recognition_url: "http://127.0.0.1:9/unreachable".to_string(),
            frontend_url: "http://localhost:8081".to_string(),
            storage_dir: String::new(),
            spots_path: "data/fishing_spots.json".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            recognition_url: env::var("RECOGNITION_URL")
                .unwrap_or_else(|_| DEFAULT_RECOGNITION_URL.to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            storage_dir: env::var("STORAGE_DIR").unwrap_or_else(|_| "storage".to_string()),
            spots_path: env::var("SPOTS_PATH")
                .unwrap_or_else(|_| "data/fishing_spots.json".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
