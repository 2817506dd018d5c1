//! The recursive configuration value type.

use indexmap::IndexMap;

/// A dynamically shaped configuration value.
///
/// Configuration data has no schema at this layer: a value is one of the
/// seven closed variants below, and nesting is arbitrary. `Object` and
/// `Array` own their children exclusively, so every value is a finite tree.
///
/// Equality is structural. Float comparison follows IEEE semantics
/// (`NaN != NaN`), so equality-based assertions must avoid NaN payloads.
///
/// # Examples
///
/// ```rust
/// use configcast::model::ConfigValue;
///
/// let port = ConfigValue::from(8080i64);
/// assert_eq!(port.as_i64(), Some(8080));
/// assert_eq!(port.as_str(), None); // no cross-variant coercion
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// Explicit absence of a value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A 64-bit signed integer. Numeric literals without a fractional part
    /// or exponent parse into this variant.
    Integer(i64),
    /// A 64-bit IEEE-754 float. Numeric literals with a fractional part or
    /// exponent parse into this variant.
    Float(f64),
    /// Owned text.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<ConfigValue>),
    /// An ordered mapping from string keys to values. Iteration order is
    /// insertion order.
    Object(IndexMap<String, ConfigValue>),
}

impl ConfigValue {
    /// View the payload as text if this is a `String`.
    ///
    /// Returns `None` for every other variant; querying the "wrong" variant
    /// is a normal outcome, not an error. `as_str` on `Integer(3)` is
    /// `None`, never `"3"`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// View the payload as an integer if this is an `Integer`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// View the payload as a boolean if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// View the payload as a float if this is a `Float`.
    ///
    /// `Integer` values are not widened; coercion is a binding-time concern
    /// that lives outside this crate.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// View the payload as a sequence if this is an `Array`.
    pub fn as_array(&self) -> Option<&[ConfigValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// View the payload as an ordered mapping if this is an `Object`.
    pub fn as_object(&self) -> Option<&IndexMap<String, ConfigValue>> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Whether this value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether this value is an `Object`.
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(items: Vec<ConfigValue>) -> Self {
        Self::Array(items)
    }
}

impl From<IndexMap<String, ConfigValue>> for ConfigValue {
    fn from(entries: IndexMap<String, ConfigValue>) -> Self {
        Self::Object(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_variant() {
        assert_eq!(ConfigValue::from("text").as_str(), Some("text"));
        assert_eq!(ConfigValue::from(42i64).as_i64(), Some(42));
        assert_eq!(ConfigValue::from(true).as_bool(), Some(true));
        assert_eq!(ConfigValue::from(2.5).as_f64(), Some(2.5));
        assert!(ConfigValue::Null.is_null());
    }

    #[test]
    fn test_accessors_reject_other_variants() {
        // A stringified number stays a string; no implicit coercion.
        assert_eq!(ConfigValue::from("3").as_i64(), None);
        assert_eq!(ConfigValue::from(3i64).as_str(), None);
        assert_eq!(ConfigValue::from(3i64).as_f64(), None);
        assert_eq!(ConfigValue::Null.as_bool(), None);
        assert!(!ConfigValue::from(3i64).is_null());
    }

    #[test]
    fn test_array_and_object_views() {
        let array = ConfigValue::from(vec![ConfigValue::from(1i64), ConfigValue::from(2i64)]);
        assert_eq!(array.as_array().map(<[ConfigValue]>::len), Some(2));
        assert_eq!(array.as_object(), None);

        let mut entries = IndexMap::new();
        entries.insert("a".to_string(), ConfigValue::from(1i64));
        let object = ConfigValue::from(entries);
        assert!(object.is_object());
        assert_eq!(object.as_array(), None);
    }

    #[test]
    fn test_structural_equality() {
        let left = ConfigValue::from(vec![ConfigValue::from("x"), ConfigValue::Null]);
        let right = ConfigValue::from(vec![ConfigValue::from("x"), ConfigValue::Null]);
        assert_eq!(left, right);
    }
}
