//! Conversion between raw scalar tokens and [`Value`]s.
//!
//! TAML scalars are unquoted, so the kind of a token is decided by its text:
//!
//! | Token | Value |
//! |-------|-------|
//! | `~`, `null` | `Null` |
//! | `""` | empty `String` |
//! | `42`, `-7` | `Int` |
//! | `3.5`, `1e9`, `NaN`, `inf`, `-inf` | `Float` |
//! | `true`, `false` | `Bool` |
//! | anything else | `String`, verbatim |
//!
//! [`decode`] never fails. [`decode_as`] is the typed path used when a caller
//! asks for a particular kind; it reports [`Error::ScalarConversion`] instead
//! of silently falling back to a string.

use crate::{Error, Result, Value};
use std::borrow::Cow;
use std::fmt;

/// Null token written for members and sequence items.
pub const NULL_TOKEN: &str = "~";
/// Alternative null token, also written for a whole null document.
pub const NULL_WORD: &str = "null";
/// Marker distinguishing an empty string from an absent value.
pub const EMPTY_STRING_MARKER: &str = "\"\"";

const NAN_TOKEN: &str = "NaN";
const INF_TOKEN: &str = "inf";
const NEG_INF_TOKEN: &str = "-inf";

/// The five scalar kinds a raw token can be decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Null,
    Bool,
    Int,
    Float,
    String,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScalarKind::Null => "null",
            ScalarKind::Bool => "boolean",
            ScalarKind::Int => "integer",
            ScalarKind::Float => "float",
            ScalarKind::String => "string",
        })
    }
}

#[inline]
fn is_null_token(raw: &str) -> bool {
    raw == NULL_TOKEN || raw == NULL_WORD
}

/// Only tokens made of number characters reach `f64::from_str`, which would
/// otherwise also accept words such as `infinity` or `nan`.
fn parse_float(raw: &str) -> Option<f64> {
    match raw {
        NAN_TOKEN => return Some(f64::NAN),
        INF_TOKEN => return Some(f64::INFINITY),
        NEG_INF_TOKEN => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    let numeric = raw.bytes().any(|b| b.is_ascii_digit())
        && raw
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if numeric {
        raw.parse::<f64>().ok()
    } else {
        None
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Decodes a raw token into the most specific scalar it spells.
///
/// # Examples
///
/// ```rust
/// use taml::{scalar, Value};
///
/// assert_eq!(scalar::decode("42"), Value::Int(42));
/// assert_eq!(scalar::decode("true"), Value::Bool(true));
/// assert_eq!(scalar::decode("\"\""), Value::String(String::new()));
/// assert_eq!(scalar::decode("~"), Value::Null);
/// assert_eq!(scalar::decode("hello world"), Value::from("hello world"));
/// ```
#[must_use]
pub fn decode(raw: &str) -> Value {
    if is_null_token(raw) {
        return Value::Null;
    }
    if raw == EMPTY_STRING_MARKER {
        return Value::String(String::new());
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Value::Int(i);
    }
    if let Some(f) = parse_float(raw) {
        return Value::Float(f);
    }
    if let Some(b) = parse_bool(raw) {
        return Value::Bool(b);
    }
    Value::String(raw.to_string())
}

/// Decodes a raw token as a specific kind.
///
/// The null tokens decode to `Null` whatever kind is requested.
///
/// # Errors
///
/// Returns [`Error::ScalarConversion`] if the token does not spell the kind.
///
/// # Examples
///
/// ```rust
/// use taml::{scalar, ScalarKind, Value};
///
/// assert_eq!(scalar::decode_as("42", ScalarKind::Float).unwrap(), Value::Float(42.0));
/// assert_eq!(scalar::decode_as("42", ScalarKind::String).unwrap(), Value::from("42"));
/// assert!(scalar::decode_as("forty-two", ScalarKind::Int).is_err());
/// ```
pub fn decode_as(raw: &str, kind: ScalarKind) -> Result<Value> {
    if is_null_token(raw) {
        return Ok(Value::Null);
    }
    let conversion = || Error::scalar_conversion(raw, kind);
    match kind {
        ScalarKind::Null => Err(conversion()),
        ScalarKind::Bool => parse_bool(raw).map(Value::Bool).ok_or_else(conversion),
        ScalarKind::Int => raw.parse::<i64>().map(Value::Int).map_err(|_| conversion()),
        ScalarKind::Float => parse_float(raw).map(Value::Float).ok_or_else(conversion),
        ScalarKind::String => {
            if raw == EMPTY_STRING_MARKER {
                Ok(Value::String(String::new()))
            } else {
                Ok(Value::String(raw.to_string()))
            }
        }
    }
}

/// Writes a float so that [`decode`] reads it back as a float.
fn format_float(f: f64) -> String {
    if f.is_nan() {
        return NAN_TOKEN.to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { INF_TOKEN } else { NEG_INF_TOKEN }.to_string();
    }
    let mut text = f.to_string();
    if !text.contains(&['.', 'e', 'E'][..]) {
        text.push_str(".0");
    }
    text
}

/// Encodes a scalar as its canonical token. Containers have no token.
///
/// # Examples
///
/// ```rust
/// use taml::{scalar, Value};
///
/// assert_eq!(scalar::encode(&Value::Float(2.0)).as_deref(), Some("2.0"));
/// assert_eq!(scalar::encode(&Value::from("")).as_deref(), Some("\"\""));
/// assert_eq!(scalar::encode(&Value::Null).as_deref(), Some("~"));
/// assert!(scalar::encode(&Value::Sequence(vec![])).is_none());
/// ```
#[must_use]
pub fn encode(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => Some(Cow::Borrowed(NULL_TOKEN)),
        Value::Bool(true) => Some(Cow::Borrowed("true")),
        Value::Bool(false) => Some(Cow::Borrowed("false")),
        Value::Int(i) => Some(Cow::Owned(i.to_string())),
        Value::Float(f) => Some(Cow::Owned(format_float(*f))),
        Value::String(s) if s.is_empty() => Some(Cow::Borrowed(EMPTY_STRING_MARKER)),
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Converts an existing value to the requested scalar kind.
///
/// Strings are decoded through [`decode_as`], integers widen to floats, and
/// any scalar converts to its token as a string. `Null` stays `Null`.
///
/// # Errors
///
/// Returns [`Error::ScalarConversion`] when no conversion exists, including
/// for every container.
///
/// # Examples
///
/// ```rust
/// use taml::{scalar, ScalarKind, Value};
///
/// assert_eq!(scalar::coerce(&Value::Int(42), ScalarKind::String).unwrap(), Value::from("42"));
/// assert_eq!(scalar::coerce(&Value::from("42"), ScalarKind::Int).unwrap(), Value::Int(42));
/// assert!(scalar::coerce(&Value::Float(1.5), ScalarKind::Int).is_err());
/// ```
pub fn coerce(value: &Value, kind: ScalarKind) -> Result<Value> {
    match (value, kind) {
        (Value::Null, _) => Ok(Value::Null),
        (Value::Bool(_), ScalarKind::Bool)
        | (Value::Int(_), ScalarKind::Int)
        | (Value::Float(_), ScalarKind::Float)
        | (Value::String(_), ScalarKind::String) => Ok(value.clone()),
        (Value::Int(i), ScalarKind::Float) => Ok(Value::Float(*i as f64)),
        (Value::String(s), _) => decode_as(s, kind),
        (Value::Bool(_) | Value::Int(_) | Value::Float(_), ScalarKind::String) => {
            let token = encode(value).unwrap_or_default();
            Ok(Value::String(token.into_owned()))
        }
        (other, _) => {
            let raw = encode(other).map_or_else(|| other.type_name().to_string(), Cow::into_owned);
            Err(Error::scalar_conversion(&raw, kind))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_order() {
        assert_eq!(decode("null"), Value::Null);
        assert_eq!(decode("-7"), Value::Int(-7));
        assert_eq!(decode("3.25"), Value::Float(3.25));
        assert_eq!(decode("1e3"), Value::Float(1000.0));
        assert_eq!(decode("false"), Value::Bool(false));
        assert_eq!(decode("True"), Value::from("True"));
        assert_eq!(decode("value1"), Value::from("value1"));
    }

    #[test]
    fn test_float_words_stay_strings() {
        assert_eq!(decode("infinity"), Value::from("infinity"));
        assert_eq!(decode("nan"), Value::from("nan"));
        assert_eq!(decode("e"), Value::from("e"));
        assert_eq!(decode("-"), Value::from("-"));
        assert_eq!(decode("1.2.3"), Value::from("1.2.3"));
        assert!(matches!(decode("NaN"), Value::Float(f) if f.is_nan()));
        assert_eq!(decode("-inf"), Value::Float(f64::NEG_INFINITY));
    }

    #[test]
    fn test_quote_marker_only_when_exact() {
        assert_eq!(decode("\"\""), Value::from(""));
        assert_eq!(decode("\"x\""), Value::from("\"x\""));
    }

    #[test]
    fn test_encode_float_keeps_fraction() {
        assert_eq!(encode(&Value::Float(2.0)).unwrap(), "2.0");
        assert_eq!(encode(&Value::Float(-0.0)).unwrap(), "-0.0");
        assert_eq!(encode(&Value::Float(0.1)).unwrap(), "0.1");
        assert_eq!(encode(&Value::Float(f64::INFINITY)).unwrap(), "inf");
        assert_eq!(decode(&encode(&Value::Float(1e300)).unwrap()), Value::Float(1e300));
    }

    #[test]
    fn test_decode_as_errors() {
        let err = decode_as("12abc", ScalarKind::Int).unwrap_err();
        assert_eq!(
            err,
            Error::ScalarConversion {
                raw: "12abc".to_string(),
                target: ScalarKind::Int
            }
        );
        assert!(decode_as("yes", ScalarKind::Bool).is_err());
        assert!(decode_as("x", ScalarKind::Null).is_err());
        assert_eq!(decode_as("~", ScalarKind::Int).unwrap(), Value::Null);
        assert_eq!(decode_as("\"\"", ScalarKind::String).unwrap(), Value::from(""));
    }

    #[test]
    fn test_coerce_containers_fail() {
        let err = coerce(&Value::Sequence(vec![]), ScalarKind::String).unwrap_err();
        assert!(err.to_string().contains("sequence"));
        assert_eq!(coerce(&Value::Bool(true), ScalarKind::String).unwrap(), Value::from("true"));
        assert_eq!(coerce(&Value::Int(3), ScalarKind::Float).unwrap(), Value::Float(3.0));
    }
}
