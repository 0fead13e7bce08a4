//! Error types for Aggie Spots Lambda functions.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while proxying to the availability backend.
#[derive(Error, Debug)]
pub enum Error {
    /// Outbound request failed (connect, transport, or body decode)
    #[error("Backend request error: {0}")]
    Backend(#[from] reqwest::Error),

    /// Backend answered with a non-success HTTP status
    #[error("Backend returned status {0}")]
    BackendStatus(u16),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Get HTTP status code for this error.
    ///
    /// Every failure collapses to a 500 for the caller; the distinction
    /// between "backend down" and "backend errored" stays in the logs.
    pub fn status_code(&self) -> u16 {
        500
    }

    /// Fixed user-facing message for the error envelope.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::BackendStatus(_) => "Failed to fetch data",
            _ => "Failed to process request",
        }
    }
}
