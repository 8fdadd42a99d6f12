//! Prelude module for convenient imports.
//!
//! Provides a single `use verdict::prelude::*;` import that brings in all
//! commonly needed traits, types, validators, and combinators.
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

pub use crate::foundation::{
    Reason, RuleKind, RuleViolation, Validate, ValidateExt, ValidationErrors, ValidationResult,
    validate, validate_value,
};

pub use crate::validators::{
    Max, MaxLength, Min, MinLength, Pattern, Required, max, max_length, min, min_length, pattern,
    required,
};

pub use crate::combinators::{And, and};

pub use crate::value::{is_empty_value, length_of};
