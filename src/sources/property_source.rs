//! A single named origin of configuration data.

use crate::model::ConfigMap;

/// One prioritized, named origin of configuration.
///
/// A source represents where a block of configuration came from: a defaults
/// file, a profile-specific file, a CLI overlay, the environment. Sources
/// are immutable once constructed; precedence between them is decided
/// entirely by [`priority`](Self::priority) (higher wins) when a
/// [`PropertySourceList`](super::PropertySourceList) resolves.
///
/// # Examples
///
/// ```rust
/// use configcast::model::ConfigMap;
/// use configcast::sources::PropertySource;
///
/// let mut config = ConfigMap::new();
/// config.insert_path("server.port", 8080i64);
/// let source = PropertySource::new("application.yml", 100, config);
/// assert_eq!(source.name(), "application.yml");
/// assert_eq!(source.priority(), 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySource {
    name: String,
    priority: i32,
    config: ConfigMap,
}

impl PropertySource {
    /// Create a source from a name, a priority, and its configuration.
    pub fn new(name: impl Into<String>, priority: i32, config: ConfigMap) -> Self {
        Self {
            name: name.into(),
            priority,
            config,
        }
    }

    /// Human-readable origin name, used in logs and in the compatibility
    /// response.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Precedence of this source; higher priorities override lower ones.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The configuration this source contributes.
    pub fn config(&self) -> &ConfigMap {
        &self.config
    }
}
