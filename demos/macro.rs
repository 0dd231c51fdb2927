//! Building values with the taml! macro.
//!
//! Run with: cargo run --example macro

use taml::{taml, to_string};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let retries = 3;

    let config = taml!({
        "service": {
            "name": "billing",
            "retries": retries,
            "timeout": 2.5
        },
        "regions": ["eu-west", "us-east"],
        "maintenance": null,
        "enabled": true
    });

    println!("{}", to_string(&config)?);

    let regions = config.get("regions").and_then(|v| v.as_sequence()).map_or(0, Vec::len);
    println!("Configured regions: {}", regions);

    Ok(())
}
