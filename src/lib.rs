//! # verdict
//!
//! A composable, type-safe value validation crate with structured error
//! reports.
//!
//! ## Quick Start
//!
//! ```rust
//! use verdict::prelude::*;
//! use serde_json::json;
//!
//! let report = validate(&json!(4), &[&required(), &min(5.0), &max(10.0)]);
//! assert!(!report.is_valid());
//! assert!(report.errors().unwrap().contains(RuleKind::Min));
//! ```
//!
//! ## Model
//!
//! A validator is anything implementing [`Validate`](foundation::Validate):
//! it inspects a [`Value`] and returns `Ok(())` or a
//! [`ValidationErrors`](foundation::ValidationErrors) report keyed by
//! [`RuleKind`](foundation::RuleKind). The [`validate`](foundation::validate)
//! entry point runs every validator in order, with no short-circuiting, and
//! merges their reports so all failing rules surface at once.
//!
//! Rules other than `required` treat empty values (`null`, `""`, `[]`) as
//! "not present to validate" and pass; `required` is the sole presence gate.
//!
//! ## Built-in Validators
//!
//! - **Presence**: [`Required`](validators::Required)
//! - **Numeric bounds**: [`Min`](validators::Min), [`Max`](validators::Max)
//! - **Length bounds**: [`MinLength`](validators::MinLength),
//!   [`MaxLength`](validators::MaxLength)
//! - **Pattern**: [`Pattern`](validators::Pattern)

// ValidationErrors keeps its rule map inline (SmallVec): it is the
// fundamental error type for every validator call, and boxing it would add
// indirection to each validation for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod validators;
pub mod value;

// Re-export the candidate value type
pub use serde_json::Value;
