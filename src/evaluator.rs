//! Password evaluator - combines rule checks and the breach lookup.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::breach::BreachClient;
use crate::rules::check_rules;
use crate::verdict::{RuleFailure, Verdict};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("evaluation cancelled")]
    Cancelled,
}

/// Evaluates passwords against the fixed rule set and a breach client.
///
/// Holds no per-call state; one instance can serve concurrent evaluations.
#[derive(Clone)]
pub struct PasswordEvaluator {
    breach: Arc<dyn BreachClient>,
}

impl PasswordEvaluator {
    /// Creates an evaluator using the given breach client.
    pub fn new(breach: Arc<dyn BreachClient>) -> Self {
        Self { breach }
    }

    pub fn breach_client(&self) -> &dyn BreachClient {
        self.breach.as_ref()
    }

    /// Evaluates a password and returns the complete verdict.
    ///
    /// Every rule runs; the breach lookup runs for non-empty passwords and
    /// resolves to "not breached" on any lookup failure.
    pub async fn evaluate(&self, password: &SecretString) -> Verdict {
        let mut failures = check_rules(password);

        if !password.expose_secret().is_empty() && self.breach.is_breached(password).await {
            failures.insert(RuleFailure::PwnedPassword);
        }

        let verdict = Verdict::from_failures(failures);

        #[cfg(feature = "tracing")]
        {
            let codes: Vec<&str> = verdict.reasons().iter().map(|r| r.code()).collect();
            tracing::debug!(
                ok = verdict.ok(),
                reasons = ?codes,
                client = self.breach.name(),
                "password evaluated"
            );
        }

        verdict
    }

    /// Like [`evaluate`](Self::evaluate), but stops as soon as `token` is
    /// cancelled. A pending breach lookup is dropped, which closes its
    /// connection.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::Cancelled`] if the token fires first. No
    /// partial verdict is produced.
    pub async fn evaluate_cancellable(
        &self,
        password: &SecretString,
        token: CancellationToken,
    ) -> Result<Verdict, EvaluationError> {
        if token.is_cancelled() {
            return Err(EvaluationError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::debug!("password evaluation cancelled");
                Err(EvaluationError::Cancelled)
            }
            verdict = self.evaluate(password) => Ok(verdict),
        }
    }

    /// Evaluates and sends the verdict on `tx`. Nothing is sent if the
    /// evaluation is cancelled.
    pub async fn evaluate_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<Verdict>,
    ) {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation is about to start...");

        let Ok(verdict) = self.evaluate_cancellable(password, token).await else {
            return;
        };

        if let Err(_e) = tx.send(verdict).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password verdict: {}", _e);
        }
    }
}
