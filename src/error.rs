//! Application error types

use serde::Serialize;
use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No price data available for {0}")]
    NoPriceAvailable(String),

    #[error("No options available for {0}")]
    NoOptionsAvailable(String),

    #[error("Expiration date {0} not available")]
    ExpirationNotAvailable(String),

    #[error("No active expiration dates for {0}")]
    NoActiveExpirations(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error payload delivered inside a success-shaped response body.
///
/// The documented contract returns failures as `{"error": "..."}` with a
/// normal status code; clients inspect the payload, not the status.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub error: String,
}

impl From<&AppError> for ErrorPayload {
    fn from(err: &AppError) -> Self {
        ErrorPayload {
            error: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
