//! Utility functions and types.

use std::fmt::Debug;

/// Hides secret material in `Debug` output.
///
/// Values shorter than 12 characters are fully masked. Longer values keep
/// their first and last three characters so different keys can still be
/// told apart in logs.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.0;
        match value.chars().count() {
            0 => f.write_str("EMPTY"),
            n if n < 12 => f.write_str("***"),
            n => {
                let head: String = value.chars().take(3).collect();
                let tail: String = value.chars().skip(n - 3).collect();
                write!(f, "{head}***{tail}")
            }
        }
    }
}
