//! Length bound validators.
//!
//! Length is measured in Unicode scalar values for strings and elements for
//! arrays. A value with no length concept (numbers, booleans, objects)
//! measures `0`, so it can still trip a minimum-length rule.

use serde_json::Value;

use crate::foundation::{RuleViolation, Validate, ValidationErrors};
use crate::value::{is_empty_value, length_of};

/// Validates that a value's length is at least a minimum.
///
/// Empty values skip the check. Everything else is measured with
/// [`length_of`](crate::value::length_of), defaulting to `0` for values
/// without a length.
///
/// # Examples
///
/// ```rust
/// use verdict::validators::MinLength;
/// use verdict::foundation::Validate;
/// use serde_json::json;
///
/// let validator = MinLength::new(10);
/// assert!(validator.validate(&json!("1234567890")).is_ok());
/// assert!(validator.validate(&json!("123456789")).is_err());
/// assert!(validator.validate(&json!(null)).is_ok()); // empty skips
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinLength {
    /// Minimum required length (inclusive).
    pub min: usize,
}

impl MinLength {
    /// Creates a new minimum length validator.
    #[must_use]
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Validate for MinLength {
    fn validate(&self, value: &Value) -> Result<(), ValidationErrors> {
        if is_empty_value(value) {
            return Ok(());
        }
        let length = length_of(value).unwrap_or(0);
        if length < self.min {
            Err(ValidationErrors::single(RuleViolation::min_length(
                self.min, length,
            )))
        } else {
            Ok(())
        }
    }
}

/// Creates a minimum length validator.
#[must_use]
pub fn min_length(min: usize) -> MinLength {
    MinLength::new(min)
}

/// Validates that a value's length does not exceed a maximum.
///
/// Symmetric to [`MinLength`]; note that a value without a length measures
/// `0` and therefore always passes a maximum-length rule.
///
/// # Examples
///
/// ```rust
/// use verdict::validators::MaxLength;
/// use verdict::foundation::Validate;
/// use serde_json::json;
///
/// let validator = MaxLength::new(3);
/// assert!(validator.validate(&json!("abc")).is_ok());
/// assert!(validator.validate(&json!("abcd")).is_err());
/// assert!(validator.validate(&json!(12345)).is_ok()); // no length
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxLength {
    /// Maximum allowed length (inclusive).
    pub max: usize,
}

impl MaxLength {
    /// Creates a new maximum length validator.
    #[must_use]
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Validate for MaxLength {
    fn validate(&self, value: &Value) -> Result<(), ValidationErrors> {
        if is_empty_value(value) {
            return Ok(());
        }
        let length = length_of(value).unwrap_or(0);
        if length > self.max {
            Err(ValidationErrors::single(RuleViolation::max_length(
                self.max, length,
            )))
        } else {
            Ok(())
        }
    }
}

/// Creates a maximum length validator.
#[must_use]
pub fn max_length(max: usize) -> MaxLength {
    MaxLength::new(max)
}

// ============================================================================
// TESTS
// ============================================================================
