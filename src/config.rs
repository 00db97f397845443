//! Server configuration
//!
//! All settings come from the environment with sensible defaults, so the
//! binary runs with no configuration at all during local development.

use crate::error::{AppError, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_PROVIDER_URL: &str = "https://query1.finance.yahoo.com/v7/finance";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub provider_base_url: String,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Recognized variables: `OPTIONSWIZ_HOST`, `OPTIONSWIZ_PORT`,
    /// `OPTIONSWIZ_PROVIDER_URL`, `OPTIONSWIZ_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("OPTIONSWIZ_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match std::env::var("OPTIONSWIZ_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("Invalid OPTIONSWIZ_PORT: {}", raw)))?,
            Err(_) => DEFAULT_PORT,
        };

        let provider_base_url = std::env::var("OPTIONSWIZ_PROVIDER_URL")
            .unwrap_or_else(|_| DEFAULT_PROVIDER_URL.to_string());

        let request_timeout_secs = match std::env::var("OPTIONSWIZ_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| AppError::Config(format!("Invalid OPTIONSWIZ_TIMEOUT_SECS: {}", raw)))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            host,
            port,
            provider_base_url,
            request_timeout_secs,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            provider_base_url: DEFAULT_PROVIDER_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
