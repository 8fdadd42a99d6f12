//! Core validation types and traits.
//!
//! This module contains the fundamental building blocks of the validation
//! system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`RuleKind`], [`Reason`], [`RuleViolation`],
//!   [`ValidationErrors`], [`ValidationResult`]
//! - **Entry points**: [`validate`], [`validate_value`]
//!
//! # Architecture
//!
//! Rule identifiers are a closed enumeration and each failure carries a
//! typed reason, so a report is checked at compile time rather than by
//! probing string keys. Reports merge left to right with last-write-wins
//! per rule kind.
//!
//! # Examples
//!
//! ```rust
//! use verdict::prelude::*;
//! use serde_json::json;
//!
//! let report = validate(&json!(7), &[&required(), &min(5.0), &max(10.0)]);
//! assert!(report.is_valid());
//! ```

pub mod error;
pub mod traits;

pub use error::{Reason, RuleKind, RuleViolation, ValidationErrors, ValidationResult};
pub use traits::{Validate, ValidateExt};

use serde_json::Value;

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Runs every validator against the value and merges their reports.
///
/// All validators execute, in order, with no short-circuiting: a failure
/// never suppresses later rules, so the report shows every failing rule at
/// once. On kind collision the later entry overwrites the earlier one.
///
/// An empty validator list (or all validators passing) yields a valid
/// outcome with no report.
///
/// # Examples
///
/// ```rust
/// use verdict::prelude::*;
/// use serde_json::json;
///
/// let report = validate(&json!(4), &[&required(), &min(5.0), &max(10.0)]);
/// assert!(!report.is_valid());
///
/// let errors = report.errors().unwrap();
/// assert!(errors.contains(RuleKind::Min));
/// assert!(!errors.contains(RuleKind::Max));
/// ```
#[must_use = "validation result must be checked"]
pub fn validate(value: &Value, validators: &[&dyn Validate]) -> ValidationResult {
    let mut errors = ValidationErrors::new();
    for validator in validators {
        if let Err(report) = validator.validate(value) {
            errors.merge(report);
        }
    }
    ValidationResult::from_errors(errors)
}

/// Runs a single validator against a value.
///
/// Convenience for one-off checks where building a slice is noise.
///
/// # Examples
///
/// ```rust
/// use verdict::foundation::validate_value;
/// use verdict::validators::min_length;
/// use serde_json::json;
///
/// let report = validate_value(&json!("123456789"), &min_length(10));
/// assert!(report.is_err());
/// ```
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &Value, validator: &V) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    validator.validate(value)
}

// ============================================================================
// TESTS
// ============================================================================
