//! Combinators example for verdict.
//!
//! Run: `cargo run --example combinators`

use serde_json::json;
use verdict::prelude::*;

fn main() {
    // Combine validators with AND: both sides run, reports merge.
    let username_length = min_length(3).and(max_length(20));

    println!("Testing username validation (length 3-20):\n");

    for candidate in ["alice", "ab", "verylongusernamethatexceedslimit"] {
        match username_length.validate(&json!(candidate)) {
            Ok(()) => println!("✓ '{candidate}' is valid"),
            Err(report) => println!("✗ '{candidate}' is invalid: {report}"),
        }
    }

    // The same combination expressed as a validator list.
    let report = validate(&json!("ab"), &[&min_length(3), &max_length(20)]);
    println!("\nAs a list: valid = {}", report.is_valid());
    println!(
        "Serialized: {}",
        serde_json::to_string(&report).unwrap_or_default()
    );
}
