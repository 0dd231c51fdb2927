//! A map-like view over a TAML document whose root is a mapping.
//!
//! [`Document`] is the usual way to work with configuration files: load,
//! read and update members by key, descend into sections, and save.
//!
//! ```rust
//! use taml::Document;
//!
//! let mut doc = Document::parse("app\n\tname\tdemo\n\tport\t8080\n").unwrap();
//! let app = doc.section("app").unwrap();
//! assert_eq!(app.get_i64("port").unwrap(), Some(8080));
//!
//! doc.set("debug", true);
//! assert_eq!(doc.to_string(), "app\n\tname\tdemo\n\tport\t8080\ndebug\ttrue\n");
//! ```
//!
//! ## Flattened keys
//!
//! [`Document::flatten`] turns the tree into `section:key` paths, with
//! sequence items addressed by index:
//!
//! ```rust
//! use taml::{Document, Value};
//!
//! let doc = Document::parse("db\n\thosts\n\t\talpha\n\t\tbeta\n\tport\t5432").unwrap();
//! let flat = doc.flatten("");
//! assert_eq!(flat.get("db:hosts:1"), Some(&Value::from("beta")));
//! assert_eq!(Document::lookup_flat(&flat, "DB:Port"), Some(&Value::Int(5432)));
//! ```

use crate::scalar::{self, ScalarKind};
use crate::{de, ser, Error, Result, TamlMap, Value};
use indexmap::IndexMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Separator between path segments in flattened keys.
pub const KEY_SEPARATOR: char = ':';

/// A TAML document with a mapping root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: TamlMap,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_map(root: TamlMap) -> Self {
        Document { root }
    }

    /// Parses text into a document.
    ///
    /// Empty text and a `null` document give an empty document.
    ///
    /// # Errors
    ///
    /// Returns any parse error, or [`Error::InvalidDocumentRoot`] when the
    /// root is a scalar or a sequence.
    pub fn parse(text: &str) -> Result<Self> {
        Document::try_from(de::parse(text)?)
    }

    /// Reads and parses a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise the same
    /// errors as [`Document::parse`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded TAML file");
        Document::parse(&text)
    }

    /// Writes the canonical text of the document to a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_string();
        fs::write(path, &text)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "saved TAML file");
        Ok(())
    }

    #[must_use]
    pub fn as_map(&self) -> &TamlMap {
        &self.root
    }

    #[must_use]
    pub fn into_map(self) -> TamlMap {
        self.root
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.root.get_mut(key)
    }

    /// Sets a member, returning the value it replaced.
    ///
    /// A new key is appended; an existing key keeps its position.
    pub fn set<K, V>(&mut self, key: K, value: V) -> Option<Value>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.root.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.root.remove(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    fn get_as(&self, key: &str, kind: ScalarKind) -> Result<Option<Value>> {
        match self.root.get(key) {
            None => Ok(None),
            Some(value) => match scalar::coerce(value, kind)? {
                Value::Null => Ok(None),
                converted => Ok(Some(converted)),
            },
        }
    }

    /// Reads a member as an integer.
    ///
    /// Missing and null members give `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScalarConversion`] if the member is not an integer
    /// and does not parse as one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taml::Document;
    ///
    /// let doc = Document::parse("port\t8080\nname\tweb").unwrap();
    /// assert_eq!(doc.get_i64("port").unwrap(), Some(8080));
    /// assert_eq!(doc.get_i64("missing").unwrap(), None);
    /// assert!(doc.get_i64("name").is_err());
    /// ```
    pub fn get_i64(&self, key: &str) -> Result<Option<i64>> {
        Ok(self.get_as(key, ScalarKind::Int)?.and_then(|v| v.as_i64()))
    }

    /// Reads a member as a float; integers widen.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScalarConversion`] if the member is not numeric.
    pub fn get_f64(&self, key: &str) -> Result<Option<f64>> {
        Ok(self.get_as(key, ScalarKind::Float)?.and_then(|v| v.as_f64()))
    }

    /// Reads a member as a boolean.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScalarConversion`] unless the member is `true` or `false`.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        Ok(self.get_as(key, ScalarKind::Bool)?.and_then(|v| v.as_bool()))
    }

    /// Reads a scalar member as its string form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScalarConversion`] if the member is a container.
    pub fn get_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .get_as(key, ScalarKind::String)?
            .and_then(|v| v.as_str().map(str::to_string)))
    }

    /// Returns the nested mapping under `key` as its own document.
    ///
    /// Gives `None` when the key is missing or does not hold a mapping.
    #[must_use]
    pub fn section(&self, key: &str) -> Option<Document> {
        self.root
            .get(key)
            .and_then(Value::as_mapping)
            .map(|map| Document::from_map(map.clone()))
    }

    /// Flattens every leaf into a `a:b:c` keyed map, in document order.
    ///
    /// Sequence items are keyed by index. Null leaves are kept. An empty
    /// `prefix` gives keys relative to the root.
    #[must_use]
    pub fn flatten(&self, prefix: &str) -> IndexMap<String, Value> {
        let mut out = IndexMap::new();
        for (key, value) in &self.root {
            flatten_into(&join(prefix, key), value, &mut out);
        }
        out
    }

    /// Looks up a flattened key, ignoring ASCII case.
    ///
    /// An exact match wins over a case-insensitive one.
    #[must_use]
    pub fn lookup_flat<'a>(flat: &'a IndexMap<String, Value>, key: &str) -> Option<&'a Value> {
        flat.get(key).or_else(|| {
            flat.iter()
                .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
                .map(|(_, value)| value)
        })
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}{KEY_SEPARATOR}{key}")
    }
}

fn flatten_into(path: &str, value: &Value, out: &mut IndexMap<String, Value>) {
    match value {
        Value::Mapping(map) => {
            for (key, child) in map {
                flatten_into(&join(path, key), child, out);
            }
        }
        Value::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(&join(path, &index.to_string()), item, out);
            }
        }
        leaf => {
            out.insert(path.to_string(), leaf.clone());
        }
    }
}

impl TryFrom<Value> for Document {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Mapping(root) => Ok(Document { root }),
            Value::Null => Ok(Document::new()),
            other => Err(Error::InvalidDocumentRoot {
                found: other.type_name(),
            }),
        }
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Mapping(doc.root)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = Value::Mapping(self.root.clone());
        f.write_str(&ser::render(&root))
    }
}
