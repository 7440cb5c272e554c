//! Range API client (k-anonymity).
//!
//! Sends `GET {base_url}/range/{PREFIX}` and scans the returned
//! `SUFFIX:COUNT` lines locally. The suffix and the password never leave
//! the process.

use async_trait::async_trait;

use super::{BreachClient, BreachLookupError};
use crate::config::{BreachApiConfig, ConfigError};
use crate::fingerprint::Fingerprint;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct NetworkBreachClient {
    client: reqwest::Client,
    base_url: String,
}

impl NetworkBreachClient {
    /// Builds the client. The configured timeout bounds the whole request,
    /// from connect to the last body byte.
    pub fn new(config: &BreachApiConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn range_url(&self, prefix: &str) -> String {
        format!("{}/range/{}", self.base_url, prefix)
    }

    async fn fetch_range(&self, prefix: &str) -> Result<String, BreachLookupError> {
        let response = self
            .client
            .get(self.range_url(prefix))
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BreachLookupError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(classify_error)?;
        String::from_utf8(bytes.to_vec()).map_err(|e| BreachLookupError::Body(e.to_string()))
    }
}

#[async_trait]
impl BreachClient for NetworkBreachClient {
    fn name(&self) -> &'static str {
        "network"
    }

    async fn lookup(&self, fingerprint: &Fingerprint) -> Result<bool, BreachLookupError> {
        let body = self.fetch_range(fingerprint.prefix()).await?;
        Ok(suffix_listed(&body, fingerprint.suffix()))
    }
}

/// True if any record line starts with `suffix`.
fn suffix_listed(body: &str, suffix: &str) -> bool {
    body.lines().any(|line| line.starts_with(suffix))
}

fn classify_error(err: reqwest::Error) -> BreachLookupError {
    if err.is_timeout() {
        BreachLookupError::Timeout
    } else if err.is_connect() {
        BreachLookupError::Connect(err.to_string())
    } else if err.is_body() || err.is_decode() {
        BreachLookupError::Body(err.to_string())
    } else {
        BreachLookupError::Request(err.to_string())
    }
}
