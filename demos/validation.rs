//! Linting TAML text without building a tree.
//!
//! Run with: cargo run --example validation

use taml::{from_str, validate};

const BROKEN: &str = "\
name\tinventory
  owner\tops
items
\t\t\tbolt
note\ttoo\tmany tabs
";

fn main() {
    let result = validate(BROKEN);
    println!("valid: {}", result.is_valid);
    for error in &result.errors {
        println!("  {}", error);
        if let Some(text) = &error.line_text {
            println!("    {:?}", text);
        }
    }

    // The parser stops at the first problem instead.
    if let Err(e) = from_str(BROKEN) {
        println!("\nparse error: {}", e);
    }
}
