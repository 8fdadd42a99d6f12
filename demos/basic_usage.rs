//! Basic usage example for verdict.
//!
//! Run: `cargo run --example basic_usage`

use serde_json::json;
use verdict::prelude::*;

fn main() {
    let validators: &[&dyn Validate] = &[&required(), &min(5.0), &max(10.0)];

    for value in [json!(7), json!(4), json!(11), json!(null)] {
        let report = validate(&value, validators);
        if report.is_valid() {
            println!("✓ {value} is valid");
        } else {
            println!("✗ {value} is invalid:");
            for violation in report.errors().into_iter().flat_map(|e| e.iter()) {
                println!("    {}", violation.message);
            }
        }
    }
}
