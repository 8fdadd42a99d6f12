//! Built-in validators.
//!
//! Each primitive is a struct plus a lowercase factory function. All of them
//! share one edge-case policy: an empty value (`null`, `""`, `[]`) passes
//! every rule except `required`, so `required` alone decides presence while
//! the rest judge the format of present values.
//!
//! # Examples
//!
//! ```rust
//! use verdict::prelude::*;
//! use serde_json::json;
//!
//! let report = validate(&json!(11), &[&required(), &min(5.0), &max(10.0)]);
//! assert!(report.errors().unwrap().contains(RuleKind::Max));
//! ```

pub mod length;
pub mod pattern;
pub mod range;
pub mod required;

pub use length::{MaxLength, MinLength, max_length, min_length};
pub use pattern::{Pattern, pattern};
pub use range::{Max, Min, max, min};
pub use required::{Required, required};
