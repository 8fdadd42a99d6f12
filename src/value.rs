//! Emptiness and length probing for candidate values.
//!
//! These two predicates define the shared edge-case policy for every rule:
//! an empty value passes everything except `required`, and length rules read
//! a length only from values that have one.

use std::borrow::Cow;

use serde_json::Value;

/// Returns true if the value counts as absent.
///
/// Empty means: the absence marker (`null`), the empty string, or the empty
/// array. Nothing else qualifies; in particular, numeric `0` and `false`
/// are present values (they have no length to be zero), and `{}` is present
/// as well (objects carry no length concept).
///
/// # Examples
///
/// ```rust
/// use verdict::value::is_empty_value;
/// use serde_json::json;
///
/// assert!(is_empty_value(&json!(null)));
/// assert!(is_empty_value(&json!("")));
/// assert!(is_empty_value(&json!([])));
///
/// assert!(!is_empty_value(&json!(0)));
/// assert!(!is_empty_value(&json!(false)));
/// assert!(!is_empty_value(&json!({})));
/// ```
#[must_use]
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Returns the value's length, if it has one.
///
/// Strings measure in Unicode scalar values, arrays in elements. Every other
/// shape has no length; length rules treat that as `0`.
#[must_use]
pub fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(text) => Some(text.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// The string form of a value, as seen by the pattern rule.
///
/// Strings are used as-is; everything else falls back to its JSON text.
pub(crate) fn text_form(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string()),
    }
}
