//! Password rule checks with breach lookup
//!
//! This library checks a candidate password against a fixed rule set
//! (length, uppercase, lowercase, digit, symbol) and a breach index, and
//! returns a single [`Verdict`] listing every failed check in a fixed order.
//!
//! The breach lookup uses the k-anonymity range protocol: only the first
//! five hex characters of the password's SHA-1 leave the process. A lookup
//! that fails for any reason counts as "not breached".
//!
//! # Features
//!
//! - `network` (default): range API client ([`NetworkBreachClient`])
//! - `tracing` (default): logging via the tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BREACH_CORPUS_PATH`: use a local fingerprint file instead of the
//!   network
//! - `PWD_BREACH_API_URL`: range API base URL
//!   (default: `https://api.pwnedpasswords.com`)
//! - `PWD_BREACH_TIMEOUT_SECS`: lookup timeout in seconds (default: 3)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_breach_guard::{client_from_env, PasswordEvaluator};
//! use secrecy::SecretString;
//!
//! # async fn run() -> Result<(), pwd_breach_guard::ConfigError> {
//! // Select the breach client once at startup
//! let evaluator = PasswordEvaluator::new(client_from_env()?);
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let verdict = evaluator.evaluate(&password).await;
//!
//! println!("ok: {}", verdict.ok());
//! for reason in verdict.reasons() {
//!     println!("{}: {}", reason.code(), reason.message());
//! }
//! # Ok(())
//! # }
//! ```

mod breach;
mod config;
mod evaluator;
mod fingerprint;
mod handler;
mod response;
mod rules;
mod verdict;

// Public API
pub use breach::{
    client_from_env, corpus_path_from_env, BreachClient, BreachLookupError, CorpusError,
    LocalCorpusBreachClient,
};
#[cfg(feature = "network")]
pub use breach::NetworkBreachClient;
pub use config::{BreachApiConfig, ConfigError};
pub use evaluator::{EvaluationError, PasswordEvaluator};
pub use fingerprint::Fingerprint;
pub use handler::{handle_request, parse_password, HandlerResponse, RequestError};
pub use response::{verdict_json, BadRequestBody, ResponseBody, VerdictBody};
pub use rules::{check_rules, MIN_LENGTH};
pub use verdict::{RuleFailure, Verdict};
