//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use taml::{from_str, scalar, taml, ScalarKind, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = from_str("host\tlocalhost\nport\t8080\nfeatures\n\tauth\n\tlogging\nratio\t0.75\n")?;

    // Access values dynamically
    if let Value::Mapping(map) = &config {
        if let Some(Value::String(host)) = map.get("host") {
            println!("Accessing field 'host': {}", host);
        }

        if let Some(port) = map.get("port").and_then(Value::as_i64) {
            println!("Accessing field 'port': {}", port);
        }

        if let Some(Value::Sequence(features)) = map.get("features") {
            println!("Accessing field 'features': {} items\n", features.len());
        }
    }

    // Runtime type checking
    println!("Type checks:");
    for key in ["host", "port", "features", "ratio"] {
        if let Some(value) = config.get(key) {
            println!("  {:<8} is a {}", key, value.type_name());
        }
    }

    // Typed conversion of raw tokens
    println!("\nConversions:");
    println!("  '42' as float   -> {:?}", scalar::decode_as("42", ScalarKind::Float)?);
    println!("  8080 as string  -> {:?}", scalar::coerce(&Value::Int(8080), ScalarKind::String)?);
    if let Err(e) = scalar::decode_as("maybe", ScalarKind::Bool) {
        println!("  'maybe' as bool -> error: {}", e);
    }

    // Editing and re-rendering
    let mut edited = config.clone();
    if let Some(map) = edited.as_mapping_mut() {
        map.insert("tls".to_string(), taml!({ "enabled": true }));
        map.remove("ratio");
    }
    println!("\nEdited document:\n{}", edited);

    Ok(())
}
