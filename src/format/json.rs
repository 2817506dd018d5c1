//! JSON codec boundary.
//!
//! Owns the bijective mapping between `serde_json::Value` and the value
//! model. The `preserve_order` feature of `serde_json` keeps parsed key
//! order intact, which round-trip stability depends on.

use super::Format;
use crate::error::{ParseError, SerializeError};
use crate::model::{ConfigMap, ConfigValue};
use indexmap::IndexMap;

pub(crate) fn parse(text: &str) -> Result<ConfigMap, ParseError> {
    let document: serde_json::Value =
        serde_json::from_str(text).map_err(|err| parse_error(&err))?;
    let serde_json::Value::Object(entries) = document else {
        return Err(ParseError::new(
            Format::Json,
            format!("document root must be an object, found {}", root_kind(&document)),
        ));
    };
    let entries = entries
        .into_iter()
        .map(|(key, value)| Ok((key, from_json(value)?)))
        .collect::<Result<IndexMap<_, _>, ParseError>>()?;
    Ok(ConfigMap::from_object(entries))
}

pub(crate) fn serialize(map: &ConfigMap) -> Result<String, SerializeError> {
    let document: serde_json::Map<String, serde_json::Value> = map
        .iter()
        .map(|(key, value)| (key.to_string(), value_to_json(value)))
        .collect();
    serde_json::to_string_pretty(&document)
        .map_err(|err| SerializeError::new(Format::Json, err.to_string()))
}

fn from_json(value: serde_json::Value) -> Result<ConfigValue, ParseError> {
    Ok(match value {
        serde_json::Value::Null => ConfigValue::Null,
        serde_json::Value::Bool(b) => ConfigValue::Bool(b),
        serde_json::Value::Number(number) => from_number(&number)?,
        serde_json::Value::String(s) => ConfigValue::String(s),
        serde_json::Value::Array(items) => ConfigValue::Array(
            items
                .into_iter()
                .map(from_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        serde_json::Value::Object(entries) => ConfigValue::Object(
            entries
                .into_iter()
                .map(|(key, value)| Ok((key, from_json(value)?)))
                .collect::<Result<IndexMap<_, _>, ParseError>>()?,
        ),
    })
}

fn from_number(number: &serde_json::Number) -> Result<ConfigValue, ParseError> {
    if let Some(integer) = number.as_i64() {
        Ok(ConfigValue::Integer(integer))
    } else if number.is_u64() {
        Err(ParseError::new(
            Format::Json,
            format!("integer literal {number} does not fit a 64-bit signed integer"),
        ))
    } else if let Some(float) = number.as_f64() {
        Ok(ConfigValue::Float(float))
    } else {
        Err(ParseError::new(
            Format::Json,
            format!("unsupported numeric literal {number}"),
        ))
    }
}

/// Emit a value as a `serde_json::Value`.
///
/// Non-finite floats have no JSON representation and emit as `null`.
pub(crate) fn value_to_json(value: &ConfigValue) -> serde_json::Value {
    match value {
        ConfigValue::Null => serde_json::Value::Null,
        ConfigValue::Bool(b) => serde_json::Value::Bool(*b),
        ConfigValue::Integer(i) => serde_json::Value::Number((*i).into()),
        ConfigValue::Float(f) => serde_json::Number::from_f64(*f)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        ConfigValue::String(s) => serde_json::Value::String(s.clone()),
        ConfigValue::Array(items) => {
            serde_json::Value::Array(items.iter().map(value_to_json).collect())
        }
        ConfigValue::Object(entries) => serde_json::Value::Object(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), value_to_json(value)))
                .collect(),
        ),
    }
}

fn parse_error(err: &serde_json::Error) -> ParseError {
    if err.line() == 0 {
        return ParseError::new(Format::Json, err.to_string());
    }
    let (line, column) = (err.line(), err.column());
    let message = strip_location_suffix(&err.to_string(), line, column);
    ParseError::new(Format::Json, message).with_location(line, column)
}

// serde_json appends " at line L column C" to syntax errors; the position
// is carried structurally instead.
fn strip_location_suffix(message: &str, line: usize, column: usize) -> String {
    let suffix = format!(" at line {line} column {column}");
    message
        .strip_suffix(&suffix)
        .unwrap_or(message)
        .to_string()
}

fn root_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_variant_set() {
        let map = parse(
            r#"{
                "null": null,
                "flag": true,
                "count": 3,
                "ratio": 0.5,
                "name": "svc",
                "hosts": ["a", "b"],
                "nested": {"inner": 1}
            }"#,
        )
        .unwrap();
        assert!(map.get("null").is_some_and(ConfigValue::is_null));
        assert_eq!(map.get("flag"), Some(&ConfigValue::Bool(true)));
        assert_eq!(map.get("count"), Some(&ConfigValue::Integer(3)));
        assert_eq!(map.get("ratio"), Some(&ConfigValue::Float(0.5)));
        assert_eq!(map.get_path("nested.inner"), Some(&ConfigValue::Integer(1)));
    }

    #[test]
    fn test_integer_versus_float_literal() {
        let map = parse(r#"{"a": 3, "b": 3.0, "c": 3e0}"#).unwrap();
        assert_eq!(map.get("a"), Some(&ConfigValue::Integer(3)));
        assert_eq!(map.get("b"), Some(&ConfigValue::Float(3.0)));
        assert_eq!(map.get("c"), Some(&ConfigValue::Float(3.0)));
    }

    #[test]
    fn test_out_of_range_integer_is_an_error() {
        let err = parse(r#"{"big": 9223372036854775808}"#).unwrap_err();
        assert_eq!(err.format, Format::Json);
        assert!(err.message.contains("64-bit"));
    }

    #[test]
    fn test_non_object_root_is_an_error() {
        let err = parse("[1, 2, 3]").unwrap_err();
        assert!(err.message.contains("an array"));
    }

    #[test]
    fn test_syntax_error_carries_location() {
        let err = parse("{\n  \"a\": ,\n}").unwrap_err();
        let location = err.location.expect("syntax errors report a position");
        assert_eq!(location.line, 2);
    }

    #[test]
    fn test_round_trip() {
        let map = parse(r#"{"b": 1, "a": {"x": [1, 2.5, null, "s"]}, "c": false}"#).unwrap();
        let text = serialize(&map).unwrap();
        assert_eq!(parse(&text).unwrap(), map);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let map = parse(r#"{"z": 1, "a": 2, "m": {"k": 3}}"#).unwrap();
        assert_eq!(serialize(&map).unwrap(), serialize(&map).unwrap());
        // Insertion order, not alphabetical order.
        let text = serialize(&map).unwrap();
        let z = text.find("\"z\"").unwrap();
        let a = text.find("\"a\"").unwrap();
        assert!(z < a);
    }
}
