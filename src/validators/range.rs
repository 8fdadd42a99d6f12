//! Numeric bound validators.

use serde_json::Value;

use crate::foundation::{RuleViolation, Validate, ValidationErrors};
use crate::value::is_empty_value;

/// Validates that a numeric value is at least a threshold.
///
/// Empty values skip the check (presence is `required`'s business), and so
/// do non-numeric values: this rule judges magnitude, not shape. It fails
/// only when the value is a number strictly below the threshold.
///
/// # Examples
///
/// ```rust
/// use verdict::validators::Min;
/// use verdict::foundation::Validate;
/// use serde_json::json;
///
/// let validator = Min::new(5.0);
/// assert!(validator.validate(&json!(7)).is_ok());
/// assert!(validator.validate(&json!(5)).is_ok());
/// assert!(validator.validate(&json!(4)).is_err());
/// assert!(validator.validate(&json!("not a number")).is_ok());
/// assert!(validator.validate(&json!(null)).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Min {
    /// Minimum allowed value (inclusive).
    pub min: f64,
}

impl Min {
    /// Creates a new minimum validator.
    #[must_use]
    pub fn new(min: f64) -> Self {
        Self { min }
    }
}

impl Validate for Min {
    fn validate(&self, value: &Value) -> Result<(), ValidationErrors> {
        if is_empty_value(value) {
            return Ok(());
        }
        match value.as_f64() {
            Some(actual) if actual < self.min => Err(ValidationErrors::single(
                RuleViolation::min(self.min, actual),
            )),
            _ => Ok(()),
        }
    }
}

/// Creates a minimum validator.
#[must_use]
pub fn min(threshold: f64) -> Min {
    Min::new(threshold)
}

/// Validates that a numeric value does not exceed a threshold.
///
/// Symmetric to [`Min`]: skips empty and non-numeric values, fails only
/// when the value is a number strictly above the threshold.
///
/// # Examples
///
/// ```rust
/// use verdict::validators::Max;
/// use verdict::foundation::Validate;
/// use serde_json::json;
///
/// let validator = Max::new(10.0);
/// assert!(validator.validate(&json!(7)).is_ok());
/// assert!(validator.validate(&json!(10)).is_ok());
/// assert!(validator.validate(&json!(11)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Max {
    /// Maximum allowed value (inclusive).
    pub max: f64,
}

impl Max {
    /// Creates a new maximum validator.
    #[must_use]
    pub fn new(max: f64) -> Self {
        Self { max }
    }
}

impl Validate for Max {
    fn validate(&self, value: &Value) -> Result<(), ValidationErrors> {
        if is_empty_value(value) {
            return Ok(());
        }
        match value.as_f64() {
            Some(actual) if actual > self.max => Err(ValidationErrors::single(
                RuleViolation::max(self.max, actual),
            )),
            _ => Ok(()),
        }
    }
}

/// Creates a maximum validator.
#[must_use]
pub fn max(threshold: f64) -> Max {
    Max::new(threshold)
}

// ============================================================================
// TESTS
// ============================================================================
