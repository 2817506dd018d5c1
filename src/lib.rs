//! # configcast
//!
//! Core data and merge engine for a remote configuration distribution
//! service: a client requests a named, profiled configuration and receives
//! an ordered set of property sources.
//!
//! ## Overview
//!
//! `configcast` provides the pure, synchronous heart of such a service:
//! - A recursive, dynamically shaped [`model::ConfigValue`] and its ordered
//!   root mapping [`model::ConfigMap`]
//! - A recursion-safe deep [`merge`](merge::merge) with well-defined
//!   tie-breaking across prioritized [`sources::PropertySource`]s
//! - A codec layer ([`format::Format`]) translating between the model and
//!   JSON, YAML, and flat properties text
//! - A [`projection`] producing the flat wire shape remote clients expect
//!
//! Transport, authentication, file watching, and persistence live in
//! external collaborators that consume these operations.
//!
//! ## Quick Start
//!
//! ```rust
//! use configcast::prelude::*;
//!
//! # fn main() -> Result<(), ParseError> {
//! let defaults = Format::Yaml.parse("server:\n  port: 8080\n  host: localhost\n")?;
//! let overrides = Format::Properties.parse("server.port=9090\n")?;
//!
//! let mut sources = PropertySourceList::new();
//! sources.push(PropertySource::new("defaults.yml", 0, defaults));
//! sources.push(PropertySource::new("overrides.properties", 10, overrides));
//!
//! // Highest priority wins; untouched keys survive.
//! let merged = sources.resolve();
//! assert_eq!(
//!     merged.get_path("server.port"),
//!     Some(&ConfigValue::String("9090".into()))
//! );
//! assert_eq!(
//!     merged.get_path("server.host"),
//!     Some(&ConfigValue::String("localhost".into()))
//! );
//!
//! // Wire response for a remote client, one entry per source.
//! let response = project("myapp", &["prod".to_string()], None, &sources);
//! assert_eq!(response.property_sources.len(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod error;
pub mod format;
pub mod merge;
pub mod model;
pub mod projection;
pub mod sources;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::error::{ParseError, SerializeError};
    pub use crate::format::Format;
    pub use crate::merge::{merge, merge_maps};
    pub use crate::model::{ConfigMap, ConfigValue};
    pub use crate::projection::{
        ConfigurationResponse, PropertySourceResponse, flatten, project,
    };
    pub use crate::sources::{PropertySource, PropertySourceList};
}
