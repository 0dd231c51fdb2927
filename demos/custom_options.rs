//! Customizing rendered output.
//!
//! Run with: cargo run --example custom_options

use taml::{
    from_str, render_with_options, taml, to_string_with_options, LineEnding, NullToken,
    RenderOptions,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let data = taml!({
        "name": "report",
        "owner": null,
        "columns": ["id", "total"]
    });

    println!("Default:\n{}", to_string_with_options(&data, RenderOptions::new())?);

    let words = RenderOptions::new().with_null_token(NullToken::Word);
    println!("Null as word:\n{}", render_with_options(&data, &words));

    let windows = RenderOptions::new().with_line_ending(LineEnding::CrLf);
    let crlf = render_with_options(&data, &windows);
    println!("CRLF output is {} bytes and parses back: {}", crlf.len(), from_str(&crlf)? == data);

    // Embed a rendered block under an existing key
    let nested = RenderOptions::new().with_base_indent(1);
    let mut text = String::from("report\n");
    text.push_str(&render_with_options(&data, &nested));
    let wrapped = from_str(&text)?;
    println!("\nEmbedded:\n{}", wrapped);

    Ok(())
}
