//! The error model for validation failures.
//!
//! Rules form a closed enumeration ([`RuleKind`]), each failure carries a
//! typed detail payload ([`Reason`]), and a report ([`ValidationErrors`]) is
//! an ordered map from rule kind to violation with explicit last-write-wins
//! semantics on duplicate kinds.
//!
//! All message strings use `Cow<'static, str>` so the fixed parts of a
//! message never allocate.

use std::borrow::Cow;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use smallvec::SmallVec;

// ============================================================================
// RULE KIND
// ============================================================================

/// Identifies which rule produced an error.
///
/// This is the closed set of rule identifiers; a report holds at most one
/// entry per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    /// Presence check, the only rule that fails on empty values.
    Required,
    /// Numeric lower bound.
    Min,
    /// Numeric upper bound.
    Max,
    /// Minimum length of a string or array.
    MinLength,
    /// Maximum length of a string or array.
    MaxLength,
    /// Regular expression match.
    Pattern,
}

impl RuleKind {
    /// The rule identifier as it appears in serialized reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::Min => "min",
            RuleKind::Max => "max",
            RuleKind::MinLength => "minLength",
            RuleKind::MaxLength => "maxLength",
            RuleKind::Pattern => "pattern",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// REASON
// ============================================================================

/// Structured context for a violation, one shape per rule family.
///
/// Serializes as a bare object (`{"min": 5.0, "actual": 4.0}`), so reports
/// keep the conventional wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reason {
    /// The value fell below the numeric lower bound.
    Min {
        /// The configured lower bound.
        min: f64,
        /// The offending value.
        actual: f64,
    },
    /// The value exceeded the numeric upper bound.
    Max {
        /// The configured upper bound.
        max: f64,
        /// The offending value.
        actual: f64,
    },
    /// The value was shorter than the minimum length.
    #[serde(rename_all = "camelCase")]
    MinLength {
        /// The configured minimum length.
        required_length: usize,
        /// The measured length.
        actual_length: usize,
    },
    /// The value was longer than the maximum length.
    #[serde(rename_all = "camelCase")]
    MaxLength {
        /// The configured maximum length.
        required_length: usize,
        /// The measured length.
        actual_length: usize,
    },
    /// The value did not match the required pattern.
    #[serde(rename_all = "camelCase")]
    Pattern {
        /// The pattern's string form.
        required_pattern: String,
        /// The string form of the checked value.
        actual_value: String,
    },
}

// ============================================================================
// RULE VIOLATION
// ============================================================================

/// A single failed rule: the kind, a human-readable message, and an optional
/// typed reason.
///
/// The kind doubles as the entry's key inside [`ValidationErrors`] and is
/// not repeated in the serialized detail record.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct RuleViolation {
    /// Which rule failed.
    #[serde(skip)]
    pub kind: RuleKind,
    /// Human-readable description of the failure.
    pub message: Cow<'static, str>,
    /// Structured context, absent for rules without one (`required`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
}

impl RuleViolation {
    /// Creates a violation with no reason payload.
    pub fn new(kind: RuleKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            reason: None,
        }
    }

    /// Attaches a reason payload.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_reason(mut self, reason: Reason) -> Self {
        self.reason = Some(reason);
        self
    }

    /// Creates a "required" violation.
    #[must_use]
    pub fn required() -> Self {
        Self::new(RuleKind::Required, "\"value\" is required")
    }

    /// Creates a "min" violation.
    #[must_use]
    pub fn min(min: f64, actual: f64) -> Self {
        Self::new(
            RuleKind::Min,
            format!("\"value\" must be greater than {min}"),
        )
        .with_reason(Reason::Min { min, actual })
    }

    /// Creates a "max" violation.
    #[must_use]
    pub fn max(max: f64, actual: f64) -> Self {
        Self::new(RuleKind::Max, format!("\"value\" must be less than {max}"))
            .with_reason(Reason::Max { max, actual })
    }

    /// Creates a "minLength" violation.
    #[must_use]
    pub fn min_length(required_length: usize, actual_length: usize) -> Self {
        Self::new(
            RuleKind::MinLength,
            format!("\"value\" length must be at least {required_length} characters long"),
        )
        .with_reason(Reason::MinLength {
            required_length,
            actual_length,
        })
    }

    /// Creates a "maxLength" violation.
    #[must_use]
    pub fn max_length(required_length: usize, actual_length: usize) -> Self {
        Self::new(
            RuleKind::MaxLength,
            format!("\"value\" length must be less than {required_length} characters long"),
        )
        .with_reason(Reason::MaxLength {
            required_length,
            actual_length,
        })
    }

    /// Creates a "pattern" violation.
    #[must_use]
    pub fn pattern(required_pattern: impl Into<String>, actual_value: impl Into<String>) -> Self {
        let required_pattern = required_pattern.into();
        Self::new(
            RuleKind::Pattern,
            format!("\"value\" fails to match the required pattern: {required_pattern}"),
        )
        .with_reason(Reason::Pattern {
            required_pattern,
            actual_value: actual_value.into(),
        })
    }
}

// ============================================================================
// VALIDATION ERRORS
// ============================================================================

/// An ordered map from [`RuleKind`] to [`RuleViolation`].
///
/// Entries keep the order in which their kind first appeared; inserting a
/// kind that is already present overwrites the stored violation in place
/// (last write wins). A report never holds two entries for the same kind.
///
/// Serializes as an object keyed by the rule identifier:
///
/// ```json
/// {"min": {"message": "...", "reason": {"min": 5.0, "actual": 4.0}}}
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    // Inline storage: reports rarely hold more than a couple of entries.
    entries: SmallVec<[RuleViolation; 2]>,
}

impl ValidationErrors {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a report holding a single violation.
    #[must_use]
    pub fn single(violation: RuleViolation) -> Self {
        let mut errors = Self::new();
        errors.insert(violation);
        errors
    }

    /// Inserts a violation, overwriting any existing entry of the same kind.
    ///
    /// An overwrite keeps the entry's original position.
    pub fn insert(&mut self, violation: RuleViolation) {
        match self.entries.iter_mut().find(|e| e.kind == violation.kind) {
            Some(existing) => *existing = violation,
            None => self.entries.push(violation),
        }
    }

    /// Merges another report into this one, left to right.
    ///
    /// Entries from `other` overwrite same-kind entries already present.
    pub fn merge(&mut self, other: ValidationErrors) {
        for violation in other.entries {
            self.insert(violation);
        }
    }

    /// Looks up the violation for a rule kind.
    #[must_use]
    pub fn get(&self, kind: RuleKind) -> Option<&RuleViolation> {
        self.entries.iter().find(|e| e.kind == kind)
    }

    /// Returns true if the report holds a violation of the given kind.
    #[must_use]
    pub fn contains(&self, kind: RuleKind) -> bool {
        self.get(kind).is_some()
    }

    /// Number of distinct failing rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no rule failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the violations in entry order.
    pub fn iter(&self) -> impl Iterator<Item = &RuleViolation> {
        self.entries.iter()
    }

    /// Iterates the failing rule kinds in entry order.
    pub fn kinds(&self) -> impl Iterator<Item = RuleKind> + '_ {
        self.entries.iter().map(|e| e.kind)
    }
}

impl FromIterator<RuleViolation> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = RuleViolation>>(iter: I) -> Self {
        let mut errors = Self::new();
        for violation in iter {
            errors.insert(violation);
        }
        errors
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for violation in &self.entries {
            map.serialize_entry(violation.kind.as_str(), violation)?;
        }
        map.end()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.entries.len())?;
        for (i, violation) in self.entries.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// The outcome of running validators against a value.
///
/// Invariant: `valid` is true exactly when `errors` is `None`; the fields
/// are private so the pair can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    errors: Option<ValidationErrors>,
    valid: bool,
}

impl ValidationResult {
    /// A passing outcome.
    #[must_use]
    pub fn passed() -> Self {
        Self {
            errors: None,
            valid: true,
        }
    }

    /// A failing outcome. The report must be non-empty.
    #[must_use]
    pub fn failed(errors: ValidationErrors) -> Self {
        debug_assert!(!errors.is_empty(), "a failing outcome needs errors");
        Self {
            errors: Some(errors),
            valid: false,
        }
    }

    /// Builds an outcome from an accumulated report: empty means valid.
    #[must_use]
    pub fn from_errors(errors: ValidationErrors) -> Self {
        if errors.is_empty() {
            Self::passed()
        } else {
            Self::failed(errors)
        }
    }

    /// Whether every validator passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The merged error report, absent when valid.
    #[must_use]
    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.errors.as_ref()
    }

    /// Consumes the outcome, yielding the report if any.
    #[must_use]
    pub fn into_errors(self) -> Option<ValidationErrors> {
        self.errors
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_messages() {
        assert_eq!(
            RuleViolation::min(5.0, 4.0).message,
            "\"value\" must be greater than 5"
        );
        assert_eq!(
            RuleViolation::max(10.0, 11.0).message,
            "\"value\" must be less than 10"
        );
        assert_eq!(
            RuleViolation::min_length(10, 9).message,
            "\"value\" length must be at least 10 characters long"
        );
        assert_eq!(
            RuleViolation::max_length(3, 5).message,
            "\"value\" length must be less than 3 characters long"
        );
        assert_eq!(RuleViolation::required().message, "\"value\" is required");
    }

    #[test]
    fn violation_reasons() {
        let violation = RuleViolation::min(5.0, 4.0);
        assert_eq!(
            violation.reason,
            Some(Reason::Min {
                min: 5.0,
                actual: 4.0
            })
        );

        assert_eq!(RuleViolation::required().reason, None);
    }

    #[test]
    fn insert_preserves_first_occurrence_order() {
        let mut errors = ValidationErrors::new();
        errors.insert(RuleViolation::min(5.0, 4.0));
        errors.insert(RuleViolation::max(10.0, 11.0));
        errors.insert(RuleViolation::min(6.0, 4.0)); // overwrite

        let kinds: Vec<_> = errors.kinds().collect();
        assert_eq!(kinds, vec![RuleKind::Min, RuleKind::Max]);
        assert_eq!(
            errors.get(RuleKind::Min).unwrap().message,
            "\"value\" must be greater than 6"
        );
    }

    #[test]
    fn merge_is_last_write_wins() {
        let mut left = ValidationErrors::single(RuleViolation::min(5.0, 4.0));
        let right = ValidationErrors::single(RuleViolation::min(7.0, 4.0));
        left.merge(right);

        assert_eq!(left.len(), 1);
        assert_eq!(
            left.get(RuleKind::Min).unwrap().message,
            "\"value\" must be greater than 7"
        );
    }

    #[test]
    fn result_invariant() {
        let passed = ValidationResult::passed();
        assert!(passed.is_valid());
        assert!(passed.errors().is_none());

        let failed = ValidationResult::failed(ValidationErrors::single(RuleViolation::required()));
        assert!(!failed.is_valid());
        assert!(failed.errors().is_some());

        assert_eq!(
            ValidationResult::from_errors(ValidationErrors::new()),
            ValidationResult::passed()
        );
    }

    #[test]
    fn serialize_report_shape() {
        let errors = ValidationErrors::single(RuleViolation::min(5.0, 4.0));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "min": {
                    "message": "\"value\" must be greater than 5",
                    "reason": {"min": 5.0, "actual": 4.0}
                }
            })
        );
    }

    #[test]
    fn serialize_required_omits_reason() {
        let errors = ValidationErrors::single(RuleViolation::required());
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"required": {"message": "\"value\" is required"}})
        );
    }

    #[test]
    fn serialize_length_reason_is_camel_case() {
        let errors = ValidationErrors::single(RuleViolation::min_length(10, 9));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json["minLength"]["reason"],
            serde_json::json!({"requiredLength": 10, "actualLength": 9})
        );
    }

    #[test]
    fn serialize_result() {
        let json = serde_json::to_value(ValidationResult::passed()).unwrap();
        assert_eq!(json, serde_json::json!({"errors": null, "valid": true}));
    }

    #[test]
    fn display_lists_violations() {
        let mut errors = ValidationErrors::new();
        errors.insert(RuleViolation::required());
        errors.insert(RuleViolation::min(5.0, 4.0));

        let text = errors.to_string();
        assert!(text.starts_with("Validation failed with 2 error(s):"));
        assert!(text.contains("1. required: \"value\" is required"));
    }
}
