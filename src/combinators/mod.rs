//! Validator combinators.
//!
//! Composition keeps the merge contract of
//! [`validate`](crate::foundation::validate): everything runs, reports
//! merge, distinct rules never suppress each other.

pub mod and;

pub use and::{And, and};
