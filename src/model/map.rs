//! Ordered root-level configuration mapping.

use super::ConfigValue;
use indexmap::IndexMap;

/// An ordered mapping from string keys to [`ConfigValue`]s.
///
/// A `ConfigMap` is logically a root-level `ConfigValue::Object` exposed as
/// a map-level API: serializing it is indistinguishable from serializing its
/// inner object directly. Iteration preserves insertion order, which
/// downstream output order and round-trip stability depend on.
///
/// Maps are created by a codec parse, by a merge, or by direct construction,
/// and mutated only through explicit insert operations.
///
/// # Examples
///
/// ```rust
/// use configcast::model::{ConfigMap, ConfigValue};
///
/// let mut map = ConfigMap::new();
/// map.insert_path("server.port", 8080i64);
/// assert_eq!(map.get_path("server.port"), Some(&ConfigValue::Integer(8080)));
/// assert_eq!(map.get_path("server.host"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigMap {
    entries: IndexMap<String, ConfigValue>,
}

impl ConfigMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from an already-ordered set of entries.
    pub fn from_object(entries: IndexMap<String, ConfigValue>) -> Self {
        Self { entries }
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Direct single-level lookup.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Walk a dotted path through nested objects.
    ///
    /// Descent continues only while the current value is an `Object`; a
    /// missing segment or a non-object intermediate yields `None`. Absence
    /// is a normal outcome, not an error.
    pub fn get_path(&self, path: &str) -> Option<&ConfigValue> {
        let mut segments = path.split('.');
        let mut current = self.entries.get(segments.next()?)?;
        for segment in segments {
            match current {
                ConfigValue::Object(entries) => current = entries.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Insert a value at a top-level key, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Insert a value at a dotted path, creating intermediate objects.
    ///
    /// An intermediate segment that already holds a non-object value is
    /// overwritten with a fresh object: last write wins, mirroring the
    /// properties-format ambiguity rule.
    pub fn insert_path(&mut self, path: &str, value: impl Into<ConfigValue>) {
        let segments: Vec<&str> = path.split('.').collect();
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let mut current = &mut self.entries;
        for segment in parents {
            let slot = current
                .entry((*segment).to_string())
                .or_insert_with(|| ConfigValue::Object(IndexMap::new()));
            if !slot.is_object() {
                *slot = ConfigValue::Object(IndexMap::new());
            }
            // The slot is always an object after the reset above.
            let ConfigValue::Object(next) = slot else {
                return;
            };
            current = next;
        }
        current.insert((*last).to_string(), value.into());
    }

    /// Iterate top-level keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Borrow the inner ordered object.
    pub fn as_object(&self) -> &IndexMap<String, ConfigValue> {
        &self.entries
    }

    /// Consume the map, yielding the inner ordered object.
    pub fn into_object(self) -> IndexMap<String, ConfigValue> {
        self.entries
    }
}

impl FromIterator<(String, ConfigValue)> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ConfigMap {
    type Item = (String, ConfigValue);
    type IntoIter = indexmap::map::IntoIter<String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(map: ConfigMap) -> Self {
        ConfigValue::Object(map.into_object())
    }
}
