//! Environment-driven configuration for breach client selection.
//!
//! # Environment Variables
//!
//! - `PWD_BREACH_CORPUS_PATH`: local fingerprint corpus; when set, no network
//!   client is built
//! - `PWD_BREACH_API_URL`: range API base URL
//!   (default: `https://api.pwnedpasswords.com`)
//! - `PWD_BREACH_TIMEOUT_SECS`: whole-request timeout in seconds (default: 3)

use std::time::Duration;

use thiserror::Error;

use crate::breach::CorpusError;

pub const CORPUS_PATH_ENV: &str = "PWD_BREACH_CORPUS_PATH";
pub const API_URL_ENV: &str = "PWD_BREACH_API_URL";
pub const TIMEOUT_ENV: &str = "PWD_BREACH_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid breach lookup timeout: {0:?} (expected a positive number of seconds)")]
    InvalidTimeout(String),
    #[error("Failed to load breach corpus: {0}")]
    Corpus(#[from] CorpusError),
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
    #[error("No breach client available: set PWD_BREACH_CORPUS_PATH or enable the `network` feature")]
    NoBreachClient,
}

/// Settings for the range API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for BreachApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl BreachApiConfig {
    /// Reads `PWD_BREACH_API_URL` and `PWD_BREACH_TIMEOUT_SECS`, falling back
    /// to defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if the timeout is set but is not
    /// a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(API_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                config.base_url = url.to_string();
            }
        }

        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            config.timeout = parse_timeout(&raw)?;
        }

        Ok(config)
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}
