//! Password rule checks
//!
//! Each rule inspects one property of the password and reports a
//! [`RuleFailure`] when the property is missing. Rules are independent:
//! every rule runs on every call and the result does not depend on the
//! order they run in.

mod length;
mod variety;

use std::collections::BTreeSet;

use secrecy::{ExposeSecret, SecretString};

use crate::verdict::RuleFailure;

pub use length::{length_rule, MIN_LENGTH};
pub use variety::{lowercase_rule, number_rule, symbol_rule, uppercase_rule};

/// Result type for rule functions.
/// - `Some(failure)` - Rule violated
/// - `None` - Rule satisfied
pub type RuleResult = Option<RuleFailure>;

type Rule = fn(&str) -> RuleResult;

const RULES: [(&str, Rule); 5] = [
    ("length", length_rule),
    ("uppercase", uppercase_rule),
    ("lowercase", lowercase_rule),
    ("number", number_rule),
    ("symbol", symbol_rule),
];

/// Runs every rule and collects all failures.
///
/// The breach check is not part of this set; see
/// [`PasswordEvaluator`](crate::PasswordEvaluator).
pub fn check_rules(password: &SecretString) -> BTreeSet<RuleFailure> {
    let pwd = password.expose_secret();
    let mut failures = BTreeSet::new();

    for (_rule_name, rule_fn) in RULES {
        if let Some(failure) = rule_fn(pwd) {
            #[cfg(feature = "tracing")]
            tracing::trace!(rule = _rule_name, failure = failure.code(), "rule violated");
            failures.insert(failure);
        }
    }

    failures
}
