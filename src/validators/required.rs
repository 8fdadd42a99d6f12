//! Presence validator.

use serde_json::Value;

use crate::foundation::{RuleViolation, Validate, ValidationErrors};
use crate::value::is_empty_value;

/// Validates that a value is present.
///
/// Fails exactly when the value is empty-per-predicate: `null`, `""`, or
/// `[]`. Numeric `0` and `false` are present values. This is the only rule
/// that rejects empty values; every other rule skips them, which makes
/// `required` the sole presence gate in a validator list.
///
/// # Examples
///
/// ```rust
/// use verdict::validators::Required;
/// use verdict::foundation::Validate;
/// use serde_json::json;
///
/// let validator = Required;
/// assert!(validator.validate(&json!(0)).is_ok());
/// assert!(validator.validate(&json!(false)).is_ok());
/// assert!(validator.validate(&json!(null)).is_err());
/// assert!(validator.validate(&json!("")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Required;

impl Validate for Required {
    fn validate(&self, value: &Value) -> Result<(), ValidationErrors> {
        if is_empty_value(value) {
            Err(ValidationErrors::single(RuleViolation::required()))
        } else {
            Ok(())
        }
    }
}

/// Creates a `Required` validator.
#[must_use]
pub const fn required() -> Required {
    Required
}
