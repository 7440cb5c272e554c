//! Rule failure codes and the evaluation verdict.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Reason a password was rejected.
///
/// Variant order is the canonical output order; `Ord` is derived from it so
/// a `BTreeSet<RuleFailure>` always iterates length → uppercase → lowercase
/// → number → symbol → pwned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleFailure {
    TooShort,
    NoUppercase,
    NoLowercase,
    NoNumber,
    NoSymbol,
    PwnedPassword,
}

impl RuleFailure {
    /// Wire code, e.g. `too_short`.
    pub fn code(self) -> &'static str {
        match self {
            RuleFailure::TooShort => "too_short",
            RuleFailure::NoUppercase => "no_uppercase",
            RuleFailure::NoLowercase => "no_lowercase",
            RuleFailure::NoNumber => "no_number",
            RuleFailure::NoSymbol => "no_symbol",
            RuleFailure::PwnedPassword => "pwned_password",
        }
    }

    /// Sentence suitable for showing to the person choosing the password.
    pub fn message(self) -> &'static str {
        match self {
            RuleFailure::TooShort => "Password must be at least 8 characters long",
            RuleFailure::NoUppercase => "Password must contain at least one uppercase letter",
            RuleFailure::NoLowercase => "Password must contain at least one lowercase letter",
            RuleFailure::NoNumber => "Password must contain at least one number",
            RuleFailure::NoSymbol => "Password must contain at least one special character",
            RuleFailure::PwnedPassword => {
                "This password has been found in data breaches and is not secure"
            }
        }
    }
}

impl fmt::Display for RuleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Complete result of one evaluation.
///
/// `ok` is never stored: it is derived from `reasons`, so the two cannot
/// disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    reasons: Vec<RuleFailure>,
}

impl Verdict {
    /// Builds a verdict from an unordered failure set.
    pub fn from_failures(failures: BTreeSet<RuleFailure>) -> Self {
        Self {
            reasons: failures.into_iter().collect(),
        }
    }

    pub fn ok(&self) -> bool {
        self.reasons.is_empty()
    }

    /// Failures in canonical order.
    pub fn reasons(&self) -> &[RuleFailure] {
        &self.reasons
    }

    pub fn contains(&self, failure: RuleFailure) -> bool {
        self.reasons.contains(&failure)
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.reasons.iter().map(|r| r.message()).collect()
    }
}
