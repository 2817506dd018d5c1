//! Ordered collection of property sources and its merge fold.

use super::PropertySource;
use crate::merge::merge_maps;
use crate::model::ConfigMap;

/// An ordered sequence of [`PropertySource`]s that folds into one merged
/// configuration.
///
/// Resolution applies sources in ascending priority, so the highest
/// priority source is merged last and wins. Ties in priority break by list
/// position: the later-positioned source wins, since the list's explicit
/// ordering already encodes intended precedence.
///
/// # Examples
///
/// ```rust
/// use configcast::model::{ConfigMap, ConfigValue};
/// use configcast::sources::{PropertySource, PropertySourceList};
///
/// let mut base = ConfigMap::new();
/// base.insert("a", 1i64);
/// let mut overlay = ConfigMap::new();
/// overlay.insert("a", 2i64);
///
/// let mut sources = PropertySourceList::new();
/// sources.push(PropertySource::new("base", 0, base));
/// sources.push(PropertySource::new("override", 10, overlay));
///
/// let merged = sources.resolve();
/// assert_eq!(merged.get("a"), Some(&ConfigValue::Integer(2)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySourceList {
    sources: Vec<PropertySource>,
}

impl PropertySourceList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source at the end of the list.
    pub fn push(&mut self, source: PropertySource) {
        self.sources.push(source);
    }

    /// Append a source, builder-style.
    pub fn with_source(mut self, source: PropertySource) -> Self {
        self.sources.push(source);
        self
    }

    /// Number of sources in the list.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the list holds no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Iterate sources in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, PropertySource> {
        self.sources.iter()
    }

    /// Source names in the order they would be merged.
    pub fn names(&self) -> Vec<&str> {
        self.merge_order().into_iter().map(PropertySource::name).collect()
    }

    /// Fold every source into one merged configuration.
    ///
    /// Starts from an empty map and merges sources in ascending priority.
    /// An empty list resolves to an empty map, not an error; the same list
    /// always resolves to the same result.
    pub fn resolve(&self) -> ConfigMap {
        let mut merged = ConfigMap::new();
        for source in self.merge_order() {
            tracing::debug!(
                source = source.name(),
                priority = source.priority(),
                "applying property source"
            );
            merged = merge_maps(&merged, source.config());
        }
        tracing::debug!(
            sources = self.sources.len(),
            keys = merged.len(),
            "resolved property sources"
        );
        merged
    }

    /// Sources sorted by ascending priority; the sort is stable, so equal
    /// priorities keep declaration order and the later one is merged last.
    fn merge_order(&self) -> Vec<&PropertySource> {
        let mut ordered: Vec<&PropertySource> = self.sources.iter().collect();
        ordered.sort_by_key(|source| source.priority());
        ordered
    }
}

impl FromIterator<PropertySource> for PropertySourceList {
    fn from_iter<I: IntoIterator<Item = PropertySource>>(iter: I) -> Self {
        Self {
            sources: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PropertySourceList {
    type Item = &'a PropertySource;
    type IntoIter = std::slice::Iter<'a, PropertySource>;

    fn into_iter(self) -> Self::IntoIter {
        self.sources.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConfigValue;

    fn source(name: &str, priority: i32, key: &str, value: i64) -> PropertySource {
        let mut config = ConfigMap::new();
        config.insert(key, value);
        PropertySource::new(name, priority, config)
    }

    #[test]
    fn test_empty_list_resolves_to_empty_map() {
        let sources = PropertySourceList::new();
        assert!(sources.resolve().is_empty());
    }

    #[test]
    fn test_priority_wins_regardless_of_declaration_order() {
        let sources = PropertySourceList::new()
            .with_source(source("override", 10, "a", 2))
            .with_source(source("base", 0, "a", 1));
        let merged = sources.resolve();
        assert_eq!(merged.get("a"), Some(&ConfigValue::Integer(2)));
    }

    #[test]
    fn test_tied_priority_later_position_wins() {
        let sources = PropertySourceList::new()
            .with_source(source("first", 5, "a", 1))
            .with_source(source("second", 5, "a", 2));
        let merged = sources.resolve();
        assert_eq!(merged.get("a"), Some(&ConfigValue::Integer(2)));
    }

    #[test]
    fn test_names_in_merge_order() {
        let sources = PropertySourceList::new()
            .with_source(source("high", 200, "a", 1))
            .with_source(source("low", 50, "b", 2))
            .with_source(source("mid", 100, "c", 3));
        assert_eq!(sources.names(), vec!["low", "mid", "high"]);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let sources = PropertySourceList::new()
            .with_source(source("base", 0, "a", 1))
            .with_source(source("override", 10, "a", 2));
        assert_eq!(sources.resolve(), sources.resolve());
    }
}
