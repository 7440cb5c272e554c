//! Breach lookup
//!
//! A [`BreachClient`] answers "has this password appeared in a breach?"
//! using only the password's [`Fingerprint`]. Two implementations exist:
//!
//! - [`NetworkBreachClient`] (feature `network`): k-anonymity range query,
//!   only the 5-char prefix leaves the process
//! - [`LocalCorpusBreachClient`]: in-memory set loaded from a fingerprint file
//!
//! One of them is chosen at startup ([`client_from_env`]) and injected into
//! the evaluator.

mod corpus;
#[cfg(feature = "network")]
mod network;

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::config::ConfigError;
use crate::fingerprint::Fingerprint;

pub use corpus::{corpus_path_from_env, CorpusError, LocalCorpusBreachClient};
#[cfg(feature = "network")]
pub use network::NetworkBreachClient;

/// Why a lookup produced no answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BreachLookupError {
    #[error("breach lookup timed out")]
    Timeout,
    #[error("could not connect to breach index: {0}")]
    Connect(String),
    #[error("breach index answered with status {0}")]
    Status(u16),
    #[error("unreadable breach index response: {0}")]
    Body(String),
    #[error("breach lookup request failed: {0}")]
    Request(String),
}

#[async_trait]
pub trait BreachClient: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Checks one fingerprint. Failures are reported, not hidden.
    async fn lookup(&self, fingerprint: &Fingerprint) -> Result<bool, BreachLookupError>;

    /// Fail-safe wrapper over [`lookup`](Self::lookup).
    ///
    /// An empty password is never looked up. Any lookup error is treated as
    /// "not breached".
    async fn is_breached(&self, password: &SecretString) -> bool {
        if password.expose_secret().is_empty() {
            return false;
        }

        let fingerprint = Fingerprint::derive(password);
        match self.lookup(&fingerprint).await {
            Ok(found) => found,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    client = self.name(),
                    prefix = fingerprint.prefix(),
                    error = %_err,
                    "breach lookup failed, treating password as not breached"
                );
                false
            }
        }
    }
}

/// Builds the breach client for this process.
///
/// If `PWD_BREACH_CORPUS_PATH` is set the local corpus is loaded and used;
/// otherwise a [`NetworkBreachClient`] is built from
/// [`BreachApiConfig::from_env`](crate::BreachApiConfig::from_env).
///
/// # Errors
///
/// Returns an error if the corpus cannot be loaded, the configuration is
/// invalid, or no implementation is compiled in.
pub fn client_from_env() -> Result<Arc<dyn BreachClient>, ConfigError> {
    if let Some(path) = corpus_path_from_env() {
        let client = LocalCorpusBreachClient::from_path(&path)?;

        #[cfg(feature = "tracing")]
        tracing::info!(client = client.name(), entries = client.len(), "breach client selected");

        return Ok(Arc::new(client));
    }

    #[cfg(feature = "network")]
    {
        let config = crate::config::BreachApiConfig::from_env()?;
        let client = NetworkBreachClient::new(&config)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            client = client.name(),
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs(),
            "breach client selected"
        );

        Ok(Arc::new(client))
    }

    #[cfg(not(feature = "network"))]
    {
        Err(ConfigError::NoBreachClient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CORPUS_PATH_ENV, TIMEOUT_ENV};
    use serial_test::serial;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::NamedTempFile;

    fn secret(value: &str) -> SecretString {
        SecretString::new(value.to_string().into())
    }

    fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key); }
    }

    struct ScriptedClient {
        outcome: Result<bool, BreachLookupError>,
        calls: AtomicUsize,
    }

    impl ScriptedClient {
        fn new(outcome: Result<bool, BreachLookupError>) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl BreachClient for ScriptedClient {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn lookup(&self, _fingerprint: &Fingerprint) -> Result<bool, BreachLookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    #[tokio::test]
    async fn test_is_breached_skips_empty_password() {
        let client = ScriptedClient::new(Ok(true));
        assert!(!client.is_breached(&secret("")).await);
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_is_breached_passes_through_result() {
        let client = ScriptedClient::new(Ok(true));
        assert!(client.is_breached(&secret("password")).await);
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_is_breached_collapses_errors_to_false() {
        let errors = [
            BreachLookupError::Timeout,
            BreachLookupError::Connect("refused".into()),
            BreachLookupError::Status(503),
            BreachLookupError::Body("truncated".into()),
            BreachLookupError::Request("builder".into()),
        ];
        for err in errors {
            let client = ScriptedClient::new(Err(err));
            assert!(!client.is_breached(&secret("password")).await);
        }
    }

    #[test]
    #[serial]
    fn test_client_from_env_prefers_corpus() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8:10434004").expect("Failed to write");
        set_env(CORPUS_PATH_ENV, file.path().to_str().unwrap());

        let client = client_from_env().expect("corpus client");
        assert_eq!(client.name(), "local-corpus");

        remove_env(CORPUS_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_client_from_env_missing_corpus_is_an_error() {
        set_env(CORPUS_PATH_ENV, "/nonexistent/path/corpus.txt");

        let result = client_from_env();
        assert!(matches!(
            result,
            Err(ConfigError::Corpus(CorpusError::FileNotFound(_)))
        ));

        remove_env(CORPUS_PATH_ENV);
    }

    #[cfg(feature = "network")]
    #[test]
    #[serial]
    fn test_client_from_env_falls_back_to_network() {
        remove_env(CORPUS_PATH_ENV);
        remove_env(TIMEOUT_ENV);

        let client = client_from_env().expect("network client");
        assert_eq!(client.name(), "network");
    }

    #[cfg(feature = "network")]
    #[test]
    #[serial]
    fn test_client_from_env_rejects_bad_timeout() {
        remove_env(CORPUS_PATH_ENV);
        set_env(TIMEOUT_ENV, "never");

        assert!(matches!(client_from_env(), Err(ConfigError::InvalidTimeout(_))));

        remove_env(TIMEOUT_ENV);
    }
}
