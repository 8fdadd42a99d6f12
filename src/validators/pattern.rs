//! Pattern validator.

use regex::Regex;
use serde_json::Value;

use crate::foundation::{RuleViolation, Validate, ValidationErrors};
use crate::value::{is_empty_value, text_form};

/// Validates that a value's string form matches a regular expression.
///
/// Empty values skip the check. The match uses search semantics
/// ([`Regex::is_match`]), so anchor the pattern (`^...$`) for a full match.
/// Non-string values are matched against their JSON text.
///
/// # Examples
///
/// ```rust
/// use verdict::validators::Pattern;
/// use verdict::foundation::Validate;
/// use serde_json::json;
///
/// let validator = Pattern::parse("^https://.+").unwrap();
/// assert!(validator.validate(&json!("https://example.com")).is_ok());
/// assert!(validator.validate(&json!("http://x.com")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Creates a pattern validator from a compiled regex.
    #[must_use]
    pub fn new(regex: Regex) -> Self {
        Self { regex }
    }

    /// Compiles a pattern string into a validator.
    ///
    /// Propagates the regex crate's error for an invalid pattern.
    pub fn parse(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::new)
    }

    /// The pattern's string form, as embedded in error messages.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Validate for Pattern {
    fn validate(&self, value: &Value) -> Result<(), ValidationErrors> {
        if is_empty_value(value) {
            return Ok(());
        }
        let text = text_form(value);
        if self.regex.is_match(&text) {
            Ok(())
        } else {
            Err(ValidationErrors::single(RuleViolation::pattern(
                self.regex.as_str(),
                text.into_owned(),
            )))
        }
    }
}

/// Creates a pattern validator from a compiled regex.
#[must_use]
pub fn pattern(regex: Regex) -> Pattern {
    Pattern::new(regex)
}

// ============================================================================
// TESTS
// ============================================================================
