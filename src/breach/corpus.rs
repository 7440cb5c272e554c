//! Local breach corpus
//!
//! Loads SHA-1 fingerprints from a text file and answers lookups from
//! memory, with no network access.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use super::{BreachClient, BreachLookupError};
use crate::config::CORPUS_PATH_ENV;
use crate::fingerprint::Fingerprint;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Breach corpus file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read breach corpus file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Breach corpus file is empty")]
    EmptyFile,
}

/// Returns the corpus path from `PWD_BREACH_CORPUS_PATH`, if set and non-empty.
pub fn corpus_path_from_env() -> Option<PathBuf> {
    std::env::var(CORPUS_PATH_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

/// Breach client backed by an in-memory fingerprint set.
#[derive(Debug, Clone, Default)]
pub struct LocalCorpusBreachClient {
    fingerprints: HashSet<Fingerprint>,
}

impl LocalCorpusBreachClient {
    /// Loads a corpus file.
    ///
    /// One record per line: a 40-char hex SHA-1, optionally followed by
    /// `:count` (the range API record shape, with the prefix restored).
    /// Case is normalized. Blank lines are ignored; malformed lines are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Breach corpus load FAILED: FileNotFound {:?}", path);
            return Err(CorpusError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Breach corpus load FAILED: Empty file {:?}", path);
            return Err(CorpusError::EmptyFile);
        }

        let mut skipped = 0usize;
        let fingerprints: HashSet<Fingerprint> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .filter_map(|l| {
                let hash = l.split(':').next().unwrap_or(l).trim();
                let parsed = Fingerprint::from_hex(hash);
                if parsed.is_none() {
                    skipped += 1;
                }
                parsed
            })
            .collect();

        if skipped > 0 {
            #[cfg(feature = "tracing")]
            tracing::warn!("Breach corpus: skipped {} malformed lines in {:?}", skipped, path);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Breach corpus loaded: {} fingerprints from {:?}",
            fingerprints.len(),
            path
        );

        Ok(Self { fingerprints })
    }

    pub fn from_fingerprints<I>(fingerprints: I) -> Self
    where
        I: IntoIterator<Item = Fingerprint>,
    {
        Self {
            fingerprints: fingerprints.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.fingerprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fingerprints.is_empty()
    }

    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.fingerprints.contains(fingerprint)
    }
}

#[async_trait]
impl BreachClient for LocalCorpusBreachClient {
    fn name(&self) -> &'static str {
        "local-corpus"
    }

    async fn lookup(&self, fingerprint: &Fingerprint) -> Result<bool, BreachLookupError> {
        Ok(self.contains(fingerprint))
    }
}
