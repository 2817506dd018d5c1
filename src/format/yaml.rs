//! YAML codec boundary.
//!
//! Owns the bijective mapping between `serde_yaml::Value` and the value
//! model. `serde_yaml`'s mapping type preserves insertion order, so key
//! order survives the round trip. Tagged values map to their inner value.

use super::Format;
use crate::error::{ParseError, SerializeError};
use crate::model::{ConfigMap, ConfigValue};
use indexmap::IndexMap;

pub(crate) fn parse(text: &str) -> Result<ConfigMap, ParseError> {
    let document: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|err| parse_error(&err))?;
    match document {
        serde_yaml::Value::Mapping(entries) => {
            let entries = entries
                .into_iter()
                .map(|(key, value)| Ok((mapping_key(key)?, from_yaml(value)?)))
                .collect::<Result<IndexMap<_, _>, ParseError>>()?;
            Ok(ConfigMap::from_object(entries))
        }
        // An empty document deserializes as null; treat it as no config.
        serde_yaml::Value::Null => Ok(ConfigMap::new()),
        other => Err(ParseError::new(
            Format::Yaml,
            format!("document root must be a mapping, found {}", root_kind(&other)),
        )),
    }
}

pub(crate) fn serialize(map: &ConfigMap) -> Result<String, SerializeError> {
    let document: serde_yaml::Mapping = map
        .iter()
        .map(|(key, value)| (serde_yaml::Value::String(key.to_string()), to_yaml(value)))
        .collect();
    serde_yaml::to_string(&document)
        .map_err(|err| SerializeError::new(Format::Yaml, err.to_string()))
}

fn from_yaml(value: serde_yaml::Value) -> Result<ConfigValue, ParseError> {
    Ok(match value {
        serde_yaml::Value::Null => ConfigValue::Null,
        serde_yaml::Value::Bool(b) => ConfigValue::Bool(b),
        serde_yaml::Value::Number(number) => from_number(&number)?,
        serde_yaml::Value::String(s) => ConfigValue::String(s),
        serde_yaml::Value::Sequence(items) => ConfigValue::Array(
            items
                .into_iter()
                .map(from_yaml)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        serde_yaml::Value::Mapping(entries) => ConfigValue::Object(
            entries
                .into_iter()
                .map(|(key, value)| Ok((mapping_key(key)?, from_yaml(value)?)))
                .collect::<Result<IndexMap<_, _>, ParseError>>()?,
        ),
        serde_yaml::Value::Tagged(tagged) => from_yaml(tagged.value)?,
    })
}

fn from_number(number: &serde_yaml::Number) -> Result<ConfigValue, ParseError> {
    if let Some(integer) = number.as_i64() {
        Ok(ConfigValue::Integer(integer))
    } else if number.is_u64() {
        Err(ParseError::new(
            Format::Yaml,
            format!("integer literal {number} does not fit a 64-bit signed integer"),
        ))
    } else if let Some(float) = number.as_f64() {
        Ok(ConfigValue::Float(float))
    } else {
        Err(ParseError::new(
            Format::Yaml,
            format!("unsupported numeric literal {number}"),
        ))
    }
}

fn to_yaml(value: &ConfigValue) -> serde_yaml::Value {
    match value {
        ConfigValue::Null => serde_yaml::Value::Null,
        ConfigValue::Bool(b) => serde_yaml::Value::Bool(*b),
        ConfigValue::Integer(i) => serde_yaml::Value::Number((*i).into()),
        ConfigValue::Float(f) => serde_yaml::Value::Number((*f).into()),
        ConfigValue::String(s) => serde_yaml::Value::String(s.clone()),
        ConfigValue::Array(items) => {
            serde_yaml::Value::Sequence(items.iter().map(to_yaml).collect())
        }
        ConfigValue::Object(entries) => serde_yaml::Value::Mapping(
            entries
                .iter()
                .map(|(key, value)| (serde_yaml::Value::String(key.clone()), to_yaml(value)))
                .collect(),
        ),
    }
}

fn mapping_key(key: serde_yaml::Value) -> Result<String, ParseError> {
    match key {
        serde_yaml::Value::String(key) => Ok(key),
        other => Err(ParseError::new(
            Format::Yaml,
            format!("mapping keys must be strings, found {}", root_kind(&other)),
        )),
    }
}

fn parse_error(err: &serde_yaml::Error) -> ParseError {
    let Some(location) = err.location() else {
        return ParseError::new(Format::Yaml, err.to_string());
    };
    let (line, column) = (location.line(), location.column());
    let message = strip_location_suffix(&err.to_string(), line, column);
    ParseError::new(Format::Yaml, message).with_location(line, column)
}

// serde_yaml appends " at line L column C" to positioned errors; the
// position is carried structurally instead.
fn strip_location_suffix(message: &str, line: usize, column: usize) -> String {
    let suffix = format!(" at line {line} column {column}");
    message
        .strip_suffix(&suffix)
        .unwrap_or(message)
        .to_string()
}

fn root_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_document() {
        let map = parse(
            "server:\n  port: 8080\n  host: localhost\nfeatures:\n  - auth\n  - cache\n",
        )
        .unwrap();
        assert_eq!(map.get_path("server.port"), Some(&ConfigValue::Integer(8080)));
        assert_eq!(
            map.get_path("server.host"),
            Some(&ConfigValue::String("localhost".to_string()))
        );
        assert_eq!(
            map.get("features"),
            Some(&ConfigValue::Array(vec![
                ConfigValue::String("auth".to_string()),
                ConfigValue::String("cache".to_string()),
            ]))
        );
    }

    #[test]
    fn test_integer_versus_float_literal() {
        let map = parse("a: 3\nb: 3.0\nc: 1e2\n").unwrap();
        assert_eq!(map.get("a"), Some(&ConfigValue::Integer(3)));
        assert_eq!(map.get("b"), Some(&ConfigValue::Float(3.0)));
        assert_eq!(map.get("c"), Some(&ConfigValue::Float(100.0)));
    }

    #[test]
    fn test_empty_document_is_empty_map() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("---\n").unwrap().is_empty());
    }

    #[test]
    fn test_sequence_root_is_an_error() {
        let err = parse("- a\n- b\n").unwrap_err();
        assert_eq!(err.format, Format::Yaml);
        assert!(err.message.contains("a sequence"));
    }

    #[test]
    fn test_non_string_key_is_an_error() {
        let err = parse("1: x\n").unwrap_err();
        assert!(err.message.contains("keys must be strings"));
    }

    #[test]
    fn test_malformed_document_carries_location() {
        let err = parse("a: b\n  c: d\n").unwrap_err();
        assert!(err.location.is_some());
    }

    #[test]
    fn test_round_trip() {
        let map = parse(
            "z: 1\na:\n  nested: [1, 2.5, null]\nflag: true\nname: 'svc'\nempty: ''\n",
        )
        .unwrap();
        let text = serialize(&map).unwrap();
        assert_eq!(parse(&text).unwrap(), map);
    }

    #[test]
    fn test_ambiguous_strings_survive_round_trip() {
        // Strings that look like other scalars must stay strings.
        let mut map = ConfigMap::new();
        map.insert("a", "true");
        map.insert("b", "123");
        map.insert("c", "null");
        let text = serialize(&map).unwrap();
        assert_eq!(parse(&text).unwrap(), map);
    }
}
