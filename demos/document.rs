//! Configuration files with Document.
//!
//! Run with: cargo run --example document

use taml::Document;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::temp_dir().join("taml-demo.taml");

    let mut doc = Document::parse(
        "# demo settings\nserver\n\thost\tlocalhost\n\tport\t8080\nlogging\n\tlevel\tinfo\n",
    )?;
    doc.set("version", 2);
    doc.save(&path)?;
    println!("Saved to {}", path.display());

    let loaded = Document::load(&path)?;
    if let Some(server) = loaded.section("server") {
        let port = server.get_i64("port")?.unwrap_or(80);
        println!("server port: {}", port);
    }

    for (key, value) in loaded.flatten("") {
        println!("  {} = {}", key, value);
    }
    println!(
        "case-insensitive lookup: {:?}",
        Document::lookup_flat(&loaded.flatten(""), "SERVER:HOST")
    );

    std::fs::remove_file(&path)?;
    Ok(())
}
