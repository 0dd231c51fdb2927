//! # taml
//!
//! A reader and writer for TAML, a tab-indented, human-readable data format.
//!
//! ## What is TAML?
//!
//! TAML is structurally close to YAML, but scoping comes only from tab
//! indentation and a single tab separates a key from its value. It has no
//! quotes, colons or brackets:
//!
//! ```text
//! # service settings
//! name	billing
//! replicas	3
//! hosts
//! 	alpha.local
//! 	beta.local
//! ```
//!
//! See [`format`] for the full grammar.
//!
//! ## Key Features
//!
//! - **Structural parsing**: the shape of every container is read from the
//!   text itself, with positioned errors for anything ambiguous
//! - **Canonical output**: [`to_string`] always writes the same text for the
//!   same value, preserving member order
//! - **Linting**: [`validate()`] reports every problem in a text without
//!   building a tree
//! - **Serde Compatible**: any `T: Serialize` can be written, and [`Value`]
//!   converts to and from other serde formats
//!
//! ## Quick Start
//!
//! ```rust
//! use taml::{from_str, to_string, Value};
//!
//! let text = "key1\tvalue1\nkey2\t42\nitems\n\tapple\n\tbanana";
//! let value = from_str(text).unwrap();
//!
//! assert_eq!(value.get("key2"), Some(&Value::Int(42)));
//! assert_eq!(
//!     to_string(&value).unwrap(),
//!     "key1\tvalue1\nkey2\t42\nitems\n\tapple\n\tbanana\n"
//! );
//! ```
//!
//! ### Writing Rust Types
//!
//! ```rust
//! use serde::Serialize;
//! use taml::to_string;
//!
//! #[derive(Serialize)]
//! struct Service {
//!     name: String,
//!     replicas: u32,
//!     hosts: Vec<String>,
//! }
//!
//! let service = Service {
//!     name: "billing".to_string(),
//!     replicas: 3,
//!     hosts: vec!["alpha.local".to_string(), "beta.local".to_string()],
//! };
//!
//! assert_eq!(
//!     to_string(&service).unwrap(),
//!     "name\tbilling\nreplicas\t3\nhosts\n\talpha.local\n\tbeta.local\n"
//! );
//! ```
//!
//! ### Dynamic Values with taml! Macro
//!
//! ```rust
//! use taml::{taml, Value};
//!
//! let data = taml!({
//!     "name": "Alice",
//!     "tags": ["rust", "serde"]
//! });
//!
//! if let Value::Mapping(map) = &data {
//!     assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! }
//! ```
//!
//! ### Configuration Files
//!
//! [`Document`] wraps a mapping root with keyed access, typed getters,
//! sections and file load/save.
//!
//! ## Logging
//!
//! Parsing, validation and rendering emit `tracing` events. Install any
//! `tracing` subscriber to see them; the library never installs one.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - parse and render a small document
//! - **`macro.rs`** - building values with the taml! macro
//! - **`dynamic_values.rs`** - inspecting and converting a `Value`
//! - **`custom_options.rs`** - line endings, null tokens and base indent
//! - **`validation.rs`** - linting broken text
//! - **`document.rs`** - configuration files with `Document`
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod document;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod scalar;
pub mod scan;
pub mod ser;
pub mod validate;
pub mod value;

pub use de::{parse, TreeBuilder};
pub use document::Document;
pub use error::{Error, ErrorCategory, Result};
pub use map::TamlMap;
pub use options::{LineEnding, NullToken, RenderOptions};
pub use scalar::ScalarKind;
pub use scan::{LexicalFault, LineRecord, Scanner};
pub use ser::{render, render_with_options, Renderer, ValueSerializer};
pub use validate::{validate, ValidationError, ValidationErrorKind, ValidationResult};
pub use value::Value;

use serde::Serialize;
use std::io;

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Serialize any `T: Serialize` to a TAML string.
///
/// # Examples
///
/// ```rust
/// use taml::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(to_string(&point).unwrap(), "x\t1\ny\t2\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be converted, for example a map
/// with non-string keys.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, RenderOptions::default())
}

/// Serialize any `T: Serialize` to a TAML string with custom options.
///
/// # Examples
///
/// ```rust
/// use taml::{to_string_with_options, LineEnding, RenderOptions};
///
/// let options = RenderOptions::new().with_line_ending(LineEnding::CrLf);
/// let text = to_string_with_options(&vec![1, 2], options).unwrap();
/// assert_eq!(text, "1\r\n2\r\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be converted.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: RenderOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    Ok(render_with_options(&value, &options))
}

/// Convert any `T: Serialize` to a `Value`.
///
/// # Examples
///
/// ```rust
/// use taml::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_mapping());
/// assert_eq!(value.get("y"), Some(&Value::Int(2)));
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be converted.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to a writer in TAML format.
///
/// # Examples
///
/// ```rust
/// use taml::{taml, to_writer};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &taml!({ "a": 1 })).unwrap();
/// assert_eq!(buffer, b"a\t1\n");
/// ```
///
/// # Errors
///
/// Returns an error if conversion fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, RenderOptions::default())
}

/// Serialize any `T: Serialize` to a writer in TAML format with custom options.
///
/// # Errors
///
/// Returns an error if conversion fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: RenderOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Parse TAML text into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use taml::{from_str, Value};
///
/// let value = from_str("x\t1\ny\t2").unwrap();
/// assert_eq!(value.get("x"), Some(&Value::Int(1)));
/// ```
///
/// # Errors
///
/// Returns the first lexical or structural error in the text. Error
/// messages include the line number and the offending line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Value> {
    parse(s)
}

/// Parse TAML from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use taml::{from_reader, Value};
/// use std::io::Cursor;
///
/// let value = from_reader(Cursor::new(b"x\t1\ny\t2")).unwrap();
/// assert_eq!(value.get("y"), Some(&Value::Int(2)));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the text is not valid TAML.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Value>
where
    R: io::Read,
{
    let mut string = String::new();
    reader.read_to_string(&mut string)?;
    from_str(&string)
}

/// Parse TAML from bytes.
///
/// # Examples
///
/// ```rust
/// use taml::{from_slice, Value};
///
/// let value = from_slice(b"items\n\ta\n\tb").unwrap();
/// assert_eq!(value.get("items").and_then(|v| v.as_sequence()).map(Vec::len), Some(2));
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not valid TAML.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Value> {
    let s = std::str::from_utf8(v).map_err(Error::custom)?;
    from_str(s)
}
