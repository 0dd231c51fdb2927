//! Ordered map type for TAML mappings.
//!
//! [`TamlMap`] wraps an [`IndexMap`] so members keep the order they were
//! inserted in. The serializer walks members in that order, so two maps with
//! the same entries in a different order render to different text and are
//! not equal.
//!
//! ## Examples
//!
//! ```rust
//! use taml::{TamlMap, Value};
//!
//! let mut map = TamlMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;

/// An insertion-ordered map of string keys to TAML values.
///
/// # Examples
///
/// ```rust
/// use taml::{TamlMap, Value};
///
/// let mut map = TamlMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TamlMap(IndexMap<String, crate::Value>);

impl TamlMap {
    #[must_use]
    pub fn new() -> Self {
        TamlMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TamlMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// A new key is appended at the end. An existing key keeps its position
    /// and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taml::{TamlMap, Value};
    ///
    /// let mut map = TamlMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Removes a key, shifting later members up so the remaining order is kept.
    pub fn remove(&mut self, key: &str) -> Option<crate::Value> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::Value> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

// IndexMap equality ignores order; mappings compare member by member.
impl PartialEq for TamlMap {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl IntoIterator for TamlMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TamlMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for TamlMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        TamlMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_equality_is_order_sensitive() {
        let a: TamlMap = vec![
            ("x".to_string(), Value::from(1)),
            ("y".to_string(), Value::from(2)),
        ]
        .into_iter()
        .collect();
        let b: TamlMap = vec![
            ("y".to_string(), Value::from(2)),
            ("x".to_string(), Value::from(1)),
        ]
        .into_iter()
        .collect();

        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut map: TamlMap = ["a", "b", "c"]
            .iter()
            .map(|k| (k.to_string(), Value::Null))
            .collect();
        map.remove("b");

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut map = TamlMap::new();
        map.insert("a".to_string(), Value::from(1));
        map.insert("b".to_string(), Value::from(2));
        map.insert("a".to_string(), Value::from(3));

        let entries: Vec<_> = map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        assert_eq!(
            entries,
            vec![
                ("a".to_string(), Value::from(3)),
                ("b".to_string(), Value::from(2)),
            ]
        );
    }
}
