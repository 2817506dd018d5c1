//! Flattening and the remote-client compatibility response.
//!
//! Remote clients consume configuration as an ordered list of property
//! sources whose maps are flat dotted-key mappings. The wire shape uses a
//! fixed camelCase naming convention; the rename lives entirely in the DTOs
//! here and never leaks into the value model.

use crate::format;
use crate::model::{ConfigMap, ConfigValue};
use crate::sources::PropertySourceList;
use indexmap::IndexMap;
use serde::Serialize;

/// Flatten nested objects into a single-level mapping with dot-joined keys.
///
/// The walk is depth-first and order-preserving. Any non-object value,
/// including an array, becomes a terminal entry unchanged; arrays are never
/// expanded into indexed keys.
///
/// # Examples
///
/// ```rust
/// use configcast::format::Format;
/// use configcast::projection::flatten;
///
/// let map = Format::Json.parse(r#"{"server": {"port": 8080}}"#).unwrap();
/// let flat = flatten(&map);
/// assert!(flat.contains_key("server.port"));
/// ```
pub fn flatten(map: &ConfigMap) -> IndexMap<String, ConfigValue> {
    let mut flat = IndexMap::new();
    for (key, value) in map.iter() {
        flatten_value(key, value, &mut flat);
    }
    flat
}

fn flatten_value(prefix: &str, value: &ConfigValue, flat: &mut IndexMap<String, ConfigValue>) {
    match value {
        ConfigValue::Object(entries) => {
            for (key, child) in entries {
                flatten_value(&format!("{prefix}.{key}"), child, flat);
            }
        }
        other => {
            flat.insert(prefix.to_string(), other.clone());
        }
    }
}

/// The wire shape consumed by remote configuration clients.
///
/// Serialized field names follow the protocol's camelCase convention.
/// `label`, `version`, and `state` are omitted from serialized output
/// entirely when absent, never emitted as an explicit null.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationResponse {
    /// Name of the requested configuration.
    pub name: String,
    /// Active profiles, in request order.
    pub profiles: Vec<String>,
    /// Optional source label (e.g. a VCS branch).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Optional source version (e.g. a VCS commit id).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Optional backend state marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// One entry per input property source, in input order.
    pub property_sources: Vec<PropertySourceResponse>,
}

impl ConfigurationResponse {
    /// Attach a source version, builder-style.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Attach a backend state marker, builder-style.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

/// One property source as seen by a remote client: a name and a flat
/// dotted-key mapping of its values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertySourceResponse {
    /// Origin name of the source.
    pub name: String,
    /// Flattened key-to-value mapping, in source order.
    pub source: IndexMap<String, serde_json::Value>,
}

/// Project a list of property sources into the compatibility response.
///
/// Source-level granularity is preserved: the response carries one entry
/// per input source, in input list order, each holding the flattened form
/// of that source's own configuration rather than the merged result. Remote
/// clients apply their own precedence over the entries.
///
/// # Examples
///
/// ```rust
/// use configcast::format::Format;
/// use configcast::projection::project;
/// use configcast::sources::{PropertySource, PropertySourceList};
///
/// let config = Format::Properties.parse("server.port=8080\n").unwrap();
/// let sources = PropertySourceList::new()
///     .with_source(PropertySource::new("application.properties", 0, config));
///
/// let response = project("myapp", &["prod".to_string()], None, &sources);
/// assert_eq!(response.property_sources.len(), 1);
/// assert!(response.version.is_none());
/// ```
pub fn project(
    name: impl Into<String>,
    profiles: &[String],
    label: Option<&str>,
    sources: &PropertySourceList,
) -> ConfigurationResponse {
    let property_sources = sources
        .iter()
        .map(|source| PropertySourceResponse {
            name: source.name().to_string(),
            source: flatten(source.config())
                .into_iter()
                .map(|(key, value)| (key, format::value_to_json(&value)))
                .collect(),
        })
        .collect();
    ConfigurationResponse {
        name: name.into(),
        profiles: profiles.to_vec(),
        label: label.map(str::to_string),
        version: None,
        state: None,
        property_sources,
    }
}
