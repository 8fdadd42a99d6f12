//! AND combinator - conjunction of validators with merged reports.

use serde_json::Value;

use crate::foundation::{Validate, ValidationErrors};

/// Combines two validators; both must pass for the combination to pass.
///
/// Both sides always run (a left failure does not suppress the right
/// check) and their reports merge left to right, so one pass over the
/// value surfaces every failing rule. On kind collision the right side's
/// entry overwrites the left's.
///
/// Usually built via [`ValidateExt::and`](crate::foundation::ValidateExt::and).
///
/// # Examples
///
/// ```rust
/// use verdict::combinators::And;
/// use verdict::foundation::Validate;
/// use verdict::validators::{max_length, min_length};
/// use serde_json::json;
///
/// let validator = And::new(min_length(5), max_length(10));
/// assert!(validator.validate(&json!("hello")).is_ok());
/// assert!(validator.validate(&json!("hi")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate,
{
    fn validate(&self, value: &Value) -> Result<(), ValidationErrors> {
        match (self.left.validate(value), self.right.validate(value)) {
            (Ok(()), Ok(())) => Ok(()),
            (Err(report), Ok(())) | (Ok(()), Err(report)) => Err(report),
            (Err(mut left), Err(right)) => {
                left.merge(right);
                Err(left)
            }
        }
    }
}

/// Creates an [`And`] combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate,
{
    And::new(left, right)
}
