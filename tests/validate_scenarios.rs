//! End-to-end scenarios for `validate` and the built-in rules.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use verdict::prelude::*;

#[rstest]
#[case(json!(7))]
#[case(json!(5))]
#[case(json!(10))]
#[case(json!(5.5))]
fn in_bounds_values_are_valid(#[case] value: Value) {
    let report = validate(&value, &[&required(), &min(5.0), &max(10.0)]);
    assert!(report.is_valid());
    assert!(report.errors().is_none());
}

#[test]
fn below_minimum_reports_only_min() {
    let report = validate(&json!(4), &[&required(), &min(5.0), &max(10.0)]);
    assert!(!report.is_valid());

    let errors = report.errors().unwrap();
    assert_eq!(errors.kinds().collect::<Vec<_>>(), vec![RuleKind::Min]);

    let violation = errors.get(RuleKind::Min).unwrap();
    assert_eq!(violation.message, "\"value\" must be greater than 5");
    assert_eq!(
        violation.reason,
        Some(Reason::Min {
            min: 5.0,
            actual: 4.0
        })
    );
}

#[test]
fn above_maximum_reports_only_max() {
    let report = validate(&json!(11), &[&required(), &min(5.0), &max(10.0)]);
    let errors = report.into_errors().unwrap();
    assert_eq!(errors.kinds().collect::<Vec<_>>(), vec![RuleKind::Max]);

    let violation = errors.get(RuleKind::Max).unwrap();
    assert_eq!(violation.message, "\"value\" must be less than 10");
}

#[test]
fn empty_validator_list_is_always_valid() {
    for value in [json!(null), json!(0), json!("x"), json!([1, 2])] {
        assert!(validate(&value, &[]).is_valid());
    }
}

#[test]
fn absent_value_trips_only_required() {
    // min and max skip empty values, so required is the sole gate.
    let report = validate(&json!(null), &[&required(), &min(5.0), &max(10.0)]);
    let errors = report.into_errors().unwrap();
    assert_eq!(errors.kinds().collect::<Vec<_>>(), vec![RuleKind::Required]);
}

#[test]
fn short_string_reports_actual_length() {
    let report = validate_value(&json!("123456789"), &min_length(10)).unwrap_err();
    let violation = report.get(RuleKind::MinLength).unwrap();
    assert_eq!(
        violation.reason,
        Some(Reason::MinLength {
            required_length: 10,
            actual_length: 9
        })
    );
}

#[test]
fn pattern_mismatch_reports_actual_value() {
    let url = Pattern::parse("^https://.+").unwrap();
    let report = validate_value(&json!("http://x.com"), &url).unwrap_err();
    let violation = report.get(RuleKind::Pattern).unwrap();
    assert_eq!(
        violation.reason,
        Some(Reason::Pattern {
            required_pattern: "^https://.+".to_string(),
            actual_value: "http://x.com".to_string(),
        })
    );
}

#[test]
fn several_distinct_rules_surface_together() {
    // A short non-https string trips both the length and the pattern rule;
    // neither suppresses the other.
    let url = Pattern::parse("^https://.+").unwrap();
    let report = validate(&json!("http"), &[&required(), &min_length(10), &url]);
    let errors = report.into_errors().unwrap();
    assert_eq!(
        errors.kinds().collect::<Vec<_>>(),
        vec![RuleKind::MinLength, RuleKind::Pattern]
    );
}

#[test]
fn duplicate_rule_kinds_keep_the_last_report() {
    let report = validate(&json!(1), &[&min(5.0), &min(3.0)]);
    let errors = report.into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(RuleKind::Min).unwrap().message,
        "\"value\" must be greater than 3"
    );
}

#[rstest]
#[case(json!(0))]
#[case(json!(false))]
#[case(json!(-1))]
#[case(json!(" "))]
#[case(json!({}))]
fn falsy_but_present_values_satisfy_required(#[case] value: Value) {
    assert!(validate(&value, &[&required()]).is_valid());
}

#[test]
fn invalid_report_serializes_to_the_wire_shape() {
    let report = validate(&json!(4), &[&required(), &min(5.0), &max(10.0)]);
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({
            "errors": {
                "min": {
                    "message": "\"value\" must be greater than 5",
                    "reason": {"min": 5.0, "actual": 4.0}
                }
            },
            "valid": false
        })
    );
}

#[test]
fn valid_report_serializes_with_null_errors() {
    let report = validate(&json!(7), &[&required(), &min(5.0), &max(10.0)]);
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({"errors": null, "valid": true})
    );
}

#[test]
fn closure_validators_merge_like_builtins() {
    let no_sevens = |value: &Value| -> Result<(), ValidationErrors> {
        match value.as_i64() {
            Some(7) => Err(ValidationErrors::single(RuleViolation::new(
                RuleKind::Pattern,
                "\"value\" must not be 7",
            ))),
            _ => Ok(()),
        }
    };

    let report = validate(&json!(7), &[&required(), &no_sevens]);
    let errors = report.into_errors().unwrap();
    assert_eq!(errors.kinds().collect::<Vec<_>>(), vec![RuleKind::Pattern]);
}

#[test]
fn and_combinator_agrees_with_validate() {
    let combined = min(5.0).and(max(10.0));
    for n in [-1, 4, 5, 7, 10, 11] {
        let via_and = combined.validate(&json!(n)).is_ok();
        let via_validate = validate(&json!(n), &[&min(5.0), &max(10.0)]).is_valid();
        assert_eq!(via_and, via_validate, "disagreement at {n}");
    }
}
