//! Flat properties codec.
//!
//! Hand-built: no library matches the dotted-key nesting convention this
//! format carries. Parsing never infers types; every value lands as a
//! string, and typing is deferred to a later binding stage.

use super::Format;
use crate::error::{ParseError, SerializeError};
use crate::model::{ConfigMap, ConfigValue};
use crate::projection::flatten;

pub(crate) fn parse(text: &str) -> Result<ConfigMap, ParseError> {
    let mut map = ConfigMap::new();
    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some(separator) = line.find(['=', ':']) else {
            return Err(
                ParseError::new(Format::Properties, "missing '=' or ':' separator")
                    .with_location(index + 1, 1),
            );
        };
        let key = line[..separator].trim();
        if key.is_empty() {
            return Err(
                ParseError::new(Format::Properties, "missing key before separator")
                    .with_location(index + 1, 1),
            );
        }
        let value = line[separator + 1..].trim();
        // Dotted keys nest; colliding paths resolve last-write-wins.
        map.insert_path(key, ConfigValue::String(value.to_string()));
    }
    Ok(map)
}

pub(crate) fn serialize(map: &ConfigMap) -> Result<String, SerializeError> {
    let mut output = String::new();
    for (key, value) in flatten(map) {
        output.push_str(&key);
        output.push('=');
        output.push_str(&render_value(&value)?);
        output.push('\n');
    }
    Ok(output)
}

fn render_value(value: &ConfigValue) -> Result<String, SerializeError> {
    Ok(match value {
        ConfigValue::Null => String::new(),
        ConfigValue::Bool(b) => b.to_string(),
        ConfigValue::Integer(i) => i.to_string(),
        ConfigValue::Float(f) => f.to_string(),
        ConfigValue::String(s) => s.clone(),
        // Properties has no list syntax; arrays render as compact JSON.
        ConfigValue::Array(_) | ConfigValue::Object(_) => {
            serde_json::to_string(&super::value_to_json(value))
                .map_err(|err| SerializeError::new(Format::Properties, err.to_string()))?
        }
    })
}
