//! Multi-format parse and serialize capabilities.
//!
//! Each format exposes the same two operations, selected through the closed
//! [`Format`] enum rather than runtime type inspection. JSON and YAML
//! delegate to `serde_json` and `serde_yaml` and own only the boundary
//! mapping onto the value model; the properties codec is hand-built because
//! no library matches the dotted-key nesting convention.

mod json;
mod properties;
mod yaml;

pub(crate) use json::value_to_json;

use crate::error::{ParseError, SerializeError};
use crate::model::ConfigMap;
use std::fmt;

/// The set of supported external representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Structured JSON documents.
    Json,
    /// YAML documents.
    Yaml,
    /// Flat `key=value` properties text with dotted-key nesting.
    Properties,
}

impl Format {
    /// Detect a format from a file extension.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use configcast::format::Format;
    ///
    /// assert_eq!(Format::from_extension("yml"), Some(Format::Yaml));
    /// assert_eq!(Format::from_extension("properties"), Some(Format::Properties));
    /// assert_eq!(Format::from_extension("txt"), None);
    /// ```
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "properties" => Some(Self::Properties),
            _ => None,
        }
    }

    /// Lowercase format name, used in error messages and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Properties => "properties",
        }
    }

    /// Parse a document in this format into a [`ConfigMap`].
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the input is malformed, when the
    /// document root is not an object, or when an integer literal exceeds
    /// the 64-bit signed range.
    pub fn parse(self, text: &str) -> Result<ConfigMap, ParseError> {
        let map = match self {
            Self::Json => json::parse(text),
            Self::Yaml => yaml::parse(text),
            Self::Properties => properties::parse(text),
        }?;
        tracing::trace!(format = self.name(), keys = map.len(), "parsed document");
        Ok(map)
    }

    /// Render a [`ConfigMap`] as a document in this format.
    ///
    /// Output is deterministic: the same map always renders to the same
    /// bytes, with key order equal to the map's insertion order.
    ///
    /// # Errors
    ///
    /// Returns a [`SerializeError`] only on writer-level failure; the
    /// in-memory model itself is always representable.
    pub fn serialize(self, map: &ConfigMap) -> Result<String, SerializeError> {
        match self {
            Self::Json => json::serialize(map),
            Self::Yaml => yaml::serialize(map),
            Self::Properties => properties::serialize(map),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
