//! TAML serialization.
//!
//! This module holds the two halves of the write path:
//!
//! - [`Renderer`] turns a [`Value`] into canonical TAML text. Rendering is
//!   total: every value produces some text.
//! - [`ValueSerializer`] turns any `T: Serialize` into a [`Value`], which the
//!   renderer then writes.
//!
//! ## Canonical Form
//!
//! - Mapping members are written in insertion order. A scalar member is
//!   `key<TAB>token`; a container member is a bare `key` line followed by
//!   its content one tab deeper.
//! - Sequence items are written one token per line.
//! - Every line ends with the line terminator. A scalar document is its
//!   token alone, and a `Null` document is `null`.
//!
//! ```rust
//! use taml::{ser::render, taml};
//!
//! let value = taml!({
//!     "server": { "host": "localhost", "port": 8080 },
//!     "tags": ["web", "api"]
//! });
//! assert_eq!(
//!     render(&value),
//!     "server\n\thost\tlocalhost\n\tport\t8080\ntags\n\tweb\n\tapi\n"
//! );
//! ```
//!
//! ## Limits
//!
//! Sequences hold scalars only. A container inside a sequence is written
//! under a bare line holding its index so no data is dropped, but that text
//! reads back as a mapping, not a sequence. An empty container member is
//! written with the null token and reads back as `Null`.
//!
//! A key or sequence item that starts with a space renders as a line the
//! scanner rejects, and one that starts with `#` at column 0 reads back as a
//! comment. Both are written anyway and logged with `tracing::warn!`.

use crate::scalar::{self, NULL_WORD};
use crate::{Error, RenderOptions, Result, TamlMap, Value};
use serde::{ser, Serialize};

/// Writes [`Value`]s as TAML text.
///
/// Created via [`Renderer::new`]; the text is taken out with
/// [`Renderer::into_inner`].
///
/// # Examples
///
/// ```rust
/// use taml::{ser::Renderer, RenderOptions, Value};
///
/// let options = RenderOptions::new();
/// let mut renderer = Renderer::new(&options);
/// renderer.render_document(&Value::Sequence(vec![Value::from(1), Value::Null]));
/// assert_eq!(renderer.into_inner(), "1\n~\n");
/// ```
pub struct Renderer<'o> {
    output: String,
    options: &'o RenderOptions,
}

impl<'o> Renderer<'o> {
    pub fn new(options: &'o RenderOptions) -> Self {
        Renderer {
            output: String::new(),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    fn write_line(&mut self, depth: usize, text: &str) {
        let indent = self.options.indent(depth);
        if text.starts_with(' ') || (indent.is_empty() && text.starts_with('#')) {
            tracing::warn!(line = text, "rendered line will not read back as written");
        }
        self.output.push_str(&indent);
        self.output.push_str(text);
        self.output.push_str(self.options.line_ending.as_str());
    }

    fn token<'v>(&self, value: &'v Value) -> Option<std::borrow::Cow<'v, str>> {
        match value {
            Value::Null => Some(self.options.null_token.as_str().into()),
            other => scalar::encode(other),
        }
    }

    /// Writes `value` as a whole document.
    pub fn render_document(&mut self, value: &Value) {
        match value {
            Value::Null => self.output.push_str(NULL_WORD),
            Value::Mapping(map) => self.write_mapping(map, 0),
            Value::Sequence(items) => self.write_sequence(items, 0),
            other => {
                if let Some(token) = scalar::encode(other) {
                    self.output.push_str(&token);
                }
            }
        }
    }

    fn write_mapping(&mut self, map: &TamlMap, depth: usize) {
        for (key, value) in map {
            match self.token(value) {
                Some(token) => {
                    let line = format!("{key}\t{token}");
                    self.write_line(depth, &line);
                }
                None if is_empty_container(value) => {
                    tracing::warn!(
                        key = key.as_str(),
                        kind = value.type_name(),
                        "empty container member is written as null"
                    );
                    let line = format!("{key}\t{}", self.options.null_token.as_str());
                    self.write_line(depth, &line);
                }
                None => {
                    self.write_line(depth, key);
                    self.write_container(value, depth + 1);
                }
            }
        }
    }

    fn write_sequence(&mut self, items: &[Value], depth: usize) {
        for (index, item) in items.iter().enumerate() {
            match self.token(item) {
                Some(token) => self.write_line(depth, &token),
                None => {
                    tracing::warn!(
                        index,
                        kind = item.type_name(),
                        "sequence item is a container; it will not read back as a sequence"
                    );
                    self.write_line(depth, &index.to_string());
                    self.write_container(item, depth + 1);
                }
            }
        }
    }

    fn write_container(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Mapping(map) => self.write_mapping(map, depth),
            Value::Sequence(items) => self.write_sequence(items, depth),
            _ => {}
        }
    }
}

fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::Mapping(map) => map.is_empty(),
        Value::Sequence(items) => items.is_empty(),
        _ => false,
    }
}

/// Renders a value as canonical TAML text with default options.
///
/// # Examples
///
/// ```rust
/// use taml::{ser::render, Value};
///
/// assert_eq!(render(&Value::Null), "null");
/// assert_eq!(render(&Value::Float(3.0)), "3.0");
/// ```
#[must_use]
pub fn render(value: &Value) -> String {
    render_with_options(value, &RenderOptions::default())
}

/// Renders a value as TAML text with custom options.
#[must_use]
pub fn render_with_options(value: &Value, options: &RenderOptions) -> String {
    let mut renderer = Renderer::new(options);
    renderer.render_document(value);
    let output = renderer.into_inner();
    tracing::debug!(
        kind = value.type_name(),
        bytes = output.len(),
        "rendered TAML document"
    );
    output
}

/// Serializes any `T: Serialize` into a [`Value`].
///
/// Enum variants carrying data become single-member mappings keyed by the
/// variant name. Map keys must serialize as strings.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use taml::{ser::ValueSerializer, Value};
///
/// #[derive(Serialize)]
/// enum Shape { Circle { radius: f64 } }
///
/// let value = Shape::Circle { radius: 1.5 }.serialize(ValueSerializer).unwrap();
/// let circle = value.get("Circle").unwrap();
/// assert_eq!(circle.get("radius"), Some(&Value::Float(1.5)));
/// ```
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTupleVariant {
    name: String,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: TamlMap,
    current_key: Option<String>,
}

pub struct SerializeStructVariant {
    name: String,
    map: TamlMap,
}

fn variant_mapping(name: String, value: Value) -> Value {
    let mut map = TamlMap::with_capacity(1);
    map.insert(name, value);
    Value::Mapping(map)
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        match i64::try_from(v) {
            Ok(i) => Ok(Value::Int(i)),
            Err(_) => Ok(Value::Float(v as f64)),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Sequence(
            v.iter().map(|&b| Value::Int(i64::from(b))).collect(),
        ))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(variant_mapping(variant.to_string(), to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            name: variant.to_string(),
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            map: TamlMap::with_capacity(len.unwrap_or(0)),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            name: variant.to_string(),
            map: TamlMap::with_capacity(len),
        })
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Sequence(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(variant_mapping(self.name, Value::Sequence(self.vec)))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_value(key)? {
            Value::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            other => Err(Error::custom(format!(
                "map keys must be strings, found {}",
                other.type_name()
            ))),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Mapping(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Mapping(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(variant_mapping(self.name, Value::Mapping(self.map)))
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LineEnding, NullToken};
    use std::collections::BTreeMap;

    fn map(entries: Vec<(&str, Value)>) -> Value {
        Value::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn test_render_flat_mapping() {
        let value = map(vec![
            ("key1", Value::from("value1")),
            ("key2", Value::Int(42)),
            ("empty", Value::from("")),
            ("missing", Value::Null),
        ]);
        assert_eq!(
            render(&value),
            "key1\tvalue1\nkey2\t42\nempty\t\"\"\nmissing\t~\n"
        );
    }

    #[test]
    fn test_render_scalar_documents() {
        assert_eq!(render(&Value::Null), "null");
        assert_eq!(render(&Value::Bool(false)), "false");
        assert_eq!(render(&Value::Int(-3)), "-3");
        assert_eq!(render(&Value::from("")), "\"\"");
    }

    #[test]
    fn test_render_nested() {
        let value = map(vec![(
            "a",
            map(vec![("b", map(vec![("c", Value::Float(1.0))]))]),
        )]);
        assert_eq!(render(&value), "a\n\tb\n\t\tc\t1.0\n");
    }

    #[test]
    fn test_render_empty_containers() {
        let value = map(vec![
            ("list", Value::Sequence(vec![])),
            ("obj", Value::Mapping(TamlMap::new())),
        ]);
        assert_eq!(render(&value), "list\t~\nobj\t~\n");
        assert_eq!(render(&Value::Mapping(TamlMap::new())), "");

        let value = map(vec![("a", Value::Int(1)), ("b", Value::Sequence(vec![]))]);
        let back = crate::from_str(&render(&value)).unwrap();
        assert_eq!(back, map(vec![("a", Value::Int(1)), ("b", Value::Null)]));
    }

    #[test]
    fn test_render_one_item_sequences() {
        for item in [Value::from("apple"), Value::Null, Value::Int(3)] {
            let value = Value::Sequence(vec![item]);
            let text = render(&value);
            assert!(text.ends_with('\n'));
            assert_eq!(crate::from_str(&text).unwrap(), value, "text was {:?}", text);
        }
    }

    #[test]
    fn test_render_unreadable_text_is_still_written() {
        let value = map(vec![("#tag", Value::Int(1)), (" pad", Value::Int(2))]);
        assert_eq!(render(&value), "#tag\t1\n pad\t2\n");

        let value = Value::Sequence(vec![Value::from("#1"), Value::from("ok")]);
        assert_eq!(render(&value), "#1\nok\n");
        // Nested, a leading `#` is content.
        let value = map(vec![("list", value)]);
        assert_eq!(crate::from_str(&render(&value)).unwrap(), value);
    }

    #[test]
    fn test_render_container_in_sequence() {
        let value = Value::Sequence(vec![
            Value::from("a"),
            map(vec![("x", Value::Int(1))]),
            Value::Sequence(vec![Value::Bool(true)]),
        ]);
        assert_eq!(render(&value), "a\n1\n\tx\t1\n2\n\ttrue\n");
    }

    #[test]
    fn test_render_options() {
        let value = map(vec![("a", Value::Null), ("b", map(vec![("c", Value::Int(1))]))]);
        let options = RenderOptions::new()
            .with_base_indent(1)
            .with_line_ending(LineEnding::CrLf)
            .with_null_token(NullToken::Word);
        assert_eq!(
            render_with_options(&value, &options),
            "\ta\tnull\r\n\tb\r\n\t\tc\t1\r\n"
        );
        assert_eq!(render_with_options(&Value::Null, &options), "null");
    }

    #[test]
    fn test_value_serializer_enums() {
        #[derive(Serialize)]
        enum Event {
            Start,
            Move(i32),
            Line(i32, i32),
            Rect { w: u8, h: u8 },
        }

        assert_eq!(to_value(&Event::Start).unwrap(), Value::from("Start"));
        assert_eq!(
            to_value(&Event::Move(3)).unwrap(),
            map(vec![("Move", Value::Int(3))])
        );
        assert_eq!(
            to_value(&Event::Line(1, 2)).unwrap(),
            map(vec![(
                "Line",
                Value::Sequence(vec![Value::Int(1), Value::Int(2)])
            )])
        );
        assert_eq!(
            to_value(&Event::Rect { w: 4, h: 5 }).unwrap(),
            map(vec![("Rect", map(vec![("w", Value::Int(4)), ("h", Value::Int(5))]))])
        );
    }

    #[test]
    fn test_value_serializer_map_keys() {
        let mut ok = BTreeMap::new();
        ok.insert("k", 1u64);
        assert_eq!(to_value(&ok).unwrap(), map(vec![("k", Value::Int(1))]));

        let mut bad = BTreeMap::new();
        bad.insert(1, "one");
        assert!(to_value(&bad).is_err());
    }

    #[test]
    fn test_value_serializer_wide_integers() {
        assert_eq!(to_value(&u64::MAX).unwrap(), Value::Float(u64::MAX as f64));
        assert_eq!(to_value(&Some(7u8)).unwrap(), Value::Int(7));
        assert_eq!(to_value(&None::<u8>).unwrap(), Value::Null);
    }
}
