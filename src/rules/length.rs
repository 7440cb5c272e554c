//! Length rule - checks password minimum length.

use super::RuleResult;
use crate::verdict::RuleFailure;

pub const MIN_LENGTH: usize = 8;

/// Fails with `TooShort` when the password has fewer than [`MIN_LENGTH`]
/// characters. Characters are Unicode scalar values, not bytes.
pub fn length_rule(password: &str) -> RuleResult {
    if password.chars().count() < MIN_LENGTH {
        return Some(RuleFailure::TooShort);
    }
    None
}
