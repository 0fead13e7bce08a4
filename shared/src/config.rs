//! Configuration management for Lambda functions.

use std::env;

/// Application configuration loaded from environment variables.
///
/// Loaded once at startup and carried in application state; handlers never
/// read the environment mid-request.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the availability backend
    pub backend_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            backend_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        }
    }
}
