//! TAML deserialization.
//!
//! This module turns the [`LineRecord`]s produced by the scanner back into a
//! [`Value`] tree. Indentation is the only scoping mechanism, and the shape of
//! every container is read from the records themselves:
//!
//! - a `key<TAB>value` line is a scalar leaf;
//! - a bare line with nothing indented under it is `Null`;
//! - a bare line with lines indented one level under it opens a container.
//!   The first of those lines decides its shape. A keyed first line makes a
//!   mapping and a plain bare first line makes a sequence. Every later line
//!   in the scope must have the same shape as the first.
//!
//! ## Usage
//!
//! Most users should use [`crate::from_str`]:
//!
//! ```rust
//! use taml::{from_str, Value};
//!
//! let value = from_str("server\n\thost\tlocalhost\n\tport\t8080").unwrap();
//! let server = value.get("server").unwrap();
//! assert_eq!(server.get("port"), Some(&Value::Int(8080)));
//! ```
//!
//! ## Working from records
//!
//! ```rust
//! use taml::de::build;
//! use taml::scan::scan;
//!
//! let records = scan("colors\n\tred\n\tgreen\nsize\t3").unwrap();
//! let (colors, next) = build(&records, 0).unwrap();
//! assert_eq!(colors.as_sequence().map(Vec::len), Some(2));
//! assert_eq!(next, 3);
//! ```

use crate::scalar;
use crate::scan::{physical_lines, scan, LineRecord};
use crate::{Error, Result, TamlMap, Value};

/// Rebuilds a value tree from scanned line records.
///
/// Created via [`TreeBuilder::new`]. Each call to [`TreeBuilder::build`]
/// consumes one record and every record nested under it.
pub struct TreeBuilder<'a> {
    records: &'a [LineRecord],
}

impl<'a> TreeBuilder<'a> {
    pub fn new(records: &'a [LineRecord]) -> Self {
        TreeBuilder { records }
    }

    /// Whether the record at `index` has lines indented under it.
    fn has_children(&self, index: usize) -> bool {
        match (self.records.get(index), self.records.get(index + 1)) {
            (Some(record), Some(next)) => next.indent > record.indent,
            _ => false,
        }
    }

    /// A keyed record names a mapping member: it has a value or children.
    fn is_keyed(&self, index: usize) -> bool {
        self.records[index].has_value || self.has_children(index)
    }

    /// Builds the node for `records[start]`.
    ///
    /// Returns the node and the index just past everything it consumed.
    ///
    /// # Errors
    ///
    /// Returns the first structural error found under the record.
    pub fn build(&self, start: usize) -> Result<(Value, usize)> {
        let record = self
            .records
            .get(start)
            .ok_or_else(|| Error::custom(format!("no record at index {start}")))?;

        tracing::trace!(
            line = record.line_number,
            indent = record.indent,
            key = %record.key,
            "building record"
        );

        if record.has_value {
            let value = record.value.as_deref().map_or(Value::Null, scalar::decode);
            return Ok((value, start + 1));
        }

        if !self.has_children(start) {
            return Ok((Value::Null, start + 1));
        }

        self.build_scope(start + 1, record.indent + 1)
    }

    /// Builds the container whose first record is `records[start]`, at `depth`.
    fn build_scope(&self, start: usize, depth: usize) -> Result<(Value, usize)> {
        let first = &self.records[start];
        if first.indent > depth {
            return Err(jump(first, depth));
        }

        if self.is_keyed(start) {
            self.build_mapping(start, depth)
        } else {
            self.build_sequence(start, depth)
        }
    }

    fn build_mapping(&self, start: usize, depth: usize) -> Result<(Value, usize)> {
        let mut map = TamlMap::new();
        let mut index = start;

        while let Some(record) = self.records.get(index) {
            if record.indent < depth {
                break;
            }
            if record.indent > depth {
                return Err(jump(record, depth));
            }
            if !self.is_keyed(index) {
                return Err(Error::ambiguous_container_shape(
                    record.line_number,
                    &record.line_text,
                ));
            }
            if map.contains_key(&record.key) {
                return Err(Error::duplicate_key(
                    record.line_number,
                    &record.key,
                    &record.line_text,
                ));
            }

            let (value, next) = self.build(index)?;
            map.insert(record.key.clone(), value);
            index = next;
        }

        Ok((Value::Mapping(map), index))
    }

    fn build_sequence(&self, start: usize, depth: usize) -> Result<(Value, usize)> {
        let mut items = Vec::new();
        let mut index = start;

        while let Some(record) = self.records.get(index) {
            if record.indent < depth {
                break;
            }
            if record.indent > depth {
                return Err(jump(record, depth));
            }
            if self.is_keyed(index) {
                return Err(Error::ambiguous_container_shape(
                    record.line_number,
                    &record.line_text,
                ));
            }

            items.push(scalar::decode(&record.key));
            index += 1;
        }

        Ok((Value::Sequence(items), index))
    }
}

fn jump(record: &LineRecord, expected: usize) -> Error {
    Error::invalid_indentation_jump(
        record.line_number,
        expected,
        record.indent,
        &record.line_text,
    )
}

/// Whether no line terminator follows `record` in `text`.
fn is_last_line(text: &str, record: &LineRecord) -> bool {
    physical_lines(text).count() == record.line_number
}

/// Builds the node for `records[start]` and returns the index past its scope.
///
/// # Errors
///
/// Returns [`Error::InvalidIndentationJump`], [`Error::AmbiguousContainerShape`]
/// or [`Error::DuplicateKey`] for malformed structure under the record.
pub fn build(records: &[LineRecord], start: usize) -> Result<(Value, usize)> {
    TreeBuilder::new(records).build(start)
}

/// Parses a whole TAML document into a [`Value`].
///
/// Empty input, whitespace-only input, the word `null` and input made only
/// of comments all give `Null`. A single bare line with no line terminator
/// after it is that line's scalar; with a terminator it is a one-item
/// sequence. Any other document is a mapping or sequence rooted at indent 0.
///
/// # Errors
///
/// Returns the first lexical or structural error; no partial tree is kept.
///
/// # Examples
///
/// ```rust
/// use taml::{de::parse, Value};
///
/// assert_eq!(parse("").unwrap(), Value::Null);
/// assert_eq!(parse("null").unwrap(), Value::Null);
/// assert_eq!(parse("42").unwrap(), Value::Int(42));
/// assert_eq!(parse("42\n").unwrap(), Value::Sequence(vec![Value::Int(42)]));
/// assert!(parse("a\n\tb\n\tc\td").is_err());
/// ```
pub fn parse(text: &str) -> Result<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == scalar::NULL_WORD {
        return Ok(Value::Null);
    }

    let records = scan(text)?;
    tracing::debug!(records = records.len(), "parsing TAML document");

    let value = match records.as_slice() {
        [] => Value::Null,
        [only] if only.is_bare() && only.indent == 0 && is_last_line(text, only) => {
            scalar::decode(&only.key)
        }
        _ => {
            let builder = TreeBuilder::new(&records);
            let (value, next) = builder.build_scope(0, 0)?;
            // Anything left over would have been indented below the root.
            if let Some(record) = records.get(next) {
                return Err(jump(record, 0));
            }
            value
        }
    };

    tracing::debug!(kind = value.type_name(), "parsed TAML document");
    Ok(value)
}
