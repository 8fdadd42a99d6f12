//! Core traits for the validation system.

use serde_json::Value;

use super::error::ValidationErrors;
use crate::combinators::And;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait every validator implements.
///
/// A validator is a pure check over a [`Value`]: `Ok(())` when the rule
/// passes (or does not apply), or a [`ValidationErrors`] report otherwise.
/// Built-in primitives report exactly one entry; custom validators may
/// report several.
///
/// Validators never panic: a value the rule cannot judge (wrong shape,
/// empty-per-predicate) simply passes. Presence is the business of
/// [`Required`](crate::validators::Required) alone.
///
/// # Examples
///
/// ```rust
/// use verdict::foundation::{RuleKind, RuleViolation, Validate, ValidationErrors};
/// use verdict::Value;
///
/// struct NoTabs;
///
/// impl Validate for NoTabs {
///     fn validate(&self, value: &Value) -> Result<(), ValidationErrors> {
///         match value.as_str() {
///             Some(s) if s.contains('\t') => Err(ValidationErrors::single(
///                 RuleViolation::new(RuleKind::Pattern, "\"value\" must not contain tabs"),
///             )),
///             _ => Ok(()),
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// Checks the value, returning the rule's error report on failure.
    fn validate(&self, value: &Value) -> Result<(), ValidationErrors>;
}

/// Plain functions and closures are validators.
///
/// This is the loose end for one-off rules that do not warrant a struct:
///
/// ```rust
/// use verdict::foundation::{validate, RuleKind, RuleViolation, ValidationErrors};
/// use verdict::Value;
/// use serde_json::json;
///
/// let even = |value: &Value| -> Result<(), ValidationErrors> {
///     match value.as_i64() {
///         Some(n) if n % 2 != 0 => Err(ValidationErrors::single(
///             RuleViolation::new(RuleKind::Pattern, "\"value\" must be even"),
///         )),
///         _ => Ok(()),
///     }
/// };
///
/// assert!(validate(&json!(4), &[&even]).is_valid());
/// ```
impl<F> Validate for F
where
    F: Fn(&Value) -> Result<(), ValidationErrors>,
{
    fn validate(&self, value: &Value) -> Result<(), ValidationErrors> {
        self(value)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```rust
/// use verdict::prelude::*;
/// use serde_json::json;
///
/// let bounds = min(5.0).and(max(10.0));
/// assert!(bounds.validate(&json!(7)).is_ok());
/// assert!(bounds.validate(&json!(4)).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators; both always run and their reports merge.
    ///
    /// Unlike a short-circuiting conjunction, the right validator runs even
    /// after the left one has failed, so every applicable rule surfaces in
    /// one report.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate,
    {
        And::new(self, other)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{RuleKind, RuleViolation};
    use serde_json::json;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        fn validate(&self, _value: &Value) -> Result<(), ValidationErrors> {
            Ok(())
        }
    }

    #[test]
    fn struct_validator() {
        assert!(AlwaysValid.validate(&json!("anything")).is_ok());
    }

    #[test]
    fn closure_validator() {
        let never = |_: &Value| -> Result<(), ValidationErrors> {
            Err(ValidationErrors::single(RuleViolation::new(
                RuleKind::Required,
                "nope",
            )))
        };
        assert!(never.validate(&json!(1)).is_err());
    }

    #[test]
    fn and_merges_both_failures() {
        let min_fail = |_: &Value| -> Result<(), ValidationErrors> {
            Err(ValidationErrors::single(RuleViolation::min(5.0, 1.0)))
        };
        let max_fail = |_: &Value| -> Result<(), ValidationErrors> {
            Err(ValidationErrors::single(RuleViolation::max(0.0, 1.0)))
        };

        let report = min_fail.and(max_fail).validate(&json!(1)).unwrap_err();
        assert_eq!(report.len(), 2);
        assert!(report.contains(RuleKind::Min));
        assert!(report.contains(RuleKind::Max));
    }
}
