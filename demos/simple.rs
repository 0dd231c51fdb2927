//! Basic TAML rendering and parsing.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use taml::{from_str, to_string, to_value};
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let user = User {
        id: 42,
        name: "Alice Johnson".to_string(),
        email: "alice@example.com".to_string(),
        roles: vec!["admin".to_string(), "ops".to_string()],
    };

    // Render to TAML
    let taml = to_string(&user)?;
    println!("TAML output:\n{}", taml);

    // Parse back into a dynamic value
    let value = from_str(&taml)?;
    assert_eq!(value, to_value(&user)?);
    println!("✓ Round-trip successful");

    Ok(())
}
