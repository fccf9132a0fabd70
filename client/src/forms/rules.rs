//! Field rules and the fixed character classes used by the auth forms.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use std::sync::LazyLock;

use regex::Regex;

/// Symbols accepted by the password "special symbol" rule.
pub const PASSWORD_SYMBOLS: &str = "~`!@#$%^&*()+,-={}[]|\\:;\"'<>.?/_₹";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9A-Za-z_]+([.-]?[0-9A-Za-z_]+)*@[0-9A-Za-z_]+([.-]?[0-9A-Za-z_]+)*(\.[0-9A-Za-z_]{2,3})+$",
    )
    .expect("email pattern is a valid regex")
});

/// A single check applied to a raw input value.
#[derive(Clone, Copy)]
pub enum Rule {
    /// Fails on the empty string.
    Required(&'static str),
    /// Fails when the value is shorter than `n` UTF-16 code units, the unit
    /// browser form controls measure `minLength` in.
    MinLength(usize, &'static str),
    /// Fails when the predicate returns `false`.
    Check(fn(&str) -> bool, &'static str),
}

impl Rule {
    fn violation(&self, value: &str) -> Option<&'static str> {
        match *self {
            Self::Required(message) => value.is_empty().then_some(message),
            Self::MinLength(min, message) => (value.encode_utf16().count() < min).then_some(message),
            Self::Check(passes, message) => (!passes(value)).then_some(message),
        }
    }
}

/// Message of the first rule `value` breaks, in order.
pub fn first_violation(value: &str, rules: &[Rule]) -> Option<&'static str> {
    rules.iter().find_map(|rule| rule.violation(value))
}

/// `local@domain.tld` with an ASCII word-character alphabet and a 2-3 letter
/// final label.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn has_no_whitespace(value: &str) -> bool {
    !value.chars().any(char::is_whitespace)
}

pub fn has_uppercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_lowercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

pub fn has_symbol(value: &str) -> bool {
    value.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}
