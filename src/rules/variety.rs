//! Character class rules - uppercase, lowercase, digits, symbols.

use std::sync::LazyLock;

use regex::Regex;

use super::RuleResult;
use crate::verdict::RuleFailure;

pub fn uppercase_rule(password: &str) -> RuleResult {
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some(RuleFailure::NoUppercase);
    }
    None
}

pub fn lowercase_rule(password: &str) -> RuleResult {
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some(RuleFailure::NoLowercase);
    }
    None
}

pub fn number_rule(password: &str) -> RuleResult {
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some(RuleFailure::NoNumber);
    }
    None
}

// Word chars are letters and numbers by general category (combining marks
// are not word chars), plus `_`. U+001C..U+001F count as whitespace.
static SYMBOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{N}_\s\x{1C}-\x{1F}]").expect("symbol pattern is valid")
});

/// A symbol is anything that is not a word character (letter, digit,
/// underscore) and not whitespace. Underscore therefore never counts.
pub fn symbol_rule(password: &str) -> RuleResult {
    if !SYMBOL.is_match(password) {
        return Some(RuleFailure::NoSymbol);
    }
    None
}
