//! Crate-internal helpers over raw `serde_json` values.
//!
//! Parsing reads attributes out of `serde_json::Map` objects with typed
//! accessors that turn shape violations into [`SirenError`]; serialization
//! builds ordered maps where unset attributes are inserted as null and
//! stripped in a final [`skip_nulls`] pass, so every `to_raw` states its
//! full canonical key order in one place.

use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::error::SirenError;
use crate::href::Href;

static EMPTY_MAP: LazyLock<Map<String, Value>> = LazyLock::new(Map::new);

/// Shared empty map for getters on values without properties.
pub(crate) fn empty_map() -> &'static Map<String, Value> {
    &EMPTY_MAP
}

/// Name of a JSON value's kind, for mismatch diagnostics.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Require `value` to be a JSON object.
pub(crate) fn as_object(value: &Value) -> Result<&Map<String, Value>, SirenError> {
    value.as_object().ok_or_else(|| SirenError::TypeMismatch {
        expected: "object",
        found: kind_name(value),
    })
}

/// Require `value` to be a JSON array.
pub(crate) fn as_array(value: &Value) -> Result<&Vec<Value>, SirenError> {
    value.as_array().ok_or_else(|| SirenError::TypeMismatch {
        expected: "array",
        found: kind_name(value),
    })
}

/// Read an attribute; absent and explicit-null both read as `None`.
pub(crate) fn get<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|value| !value.is_null())
}

/// Read an optional string attribute.
pub(crate) fn opt_string(obj: &Map<String, Value>, key: &str) -> Result<Option<String>, SirenError> {
    match get(obj, key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_owned()))
            .ok_or_else(|| SirenError::TypeMismatch {
                expected: "string",
                found: kind_name(value),
            }),
    }
}

/// Read a required string attribute.
pub(crate) fn required_string(
    obj: &Map<String, Value>,
    key: &'static str,
) -> Result<String, SirenError> {
    let value = get(obj, key).ok_or(SirenError::MissingKey { key })?;
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| SirenError::TypeMismatch {
            expected: "string",
            found: kind_name(value),
        })
}

/// Require `value` to be an array of strings only. Used for `class` and
/// `rel`, where a null or non-string element is a shape violation.
pub(crate) fn string_list(value: &Value) -> Result<Vec<String>, SirenError> {
    let items = as_array(value)?;
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item.as_str() {
            Some(s) => out.push(s.to_owned()),
            None => {
                return Err(SirenError::TypeMismatch {
                    expected: "string",
                    found: kind_name(item),
                })
            }
        }
    }
    Ok(out)
}

/// Read an optional string-list attribute.
pub(crate) fn opt_string_list(
    obj: &Map<String, Value>,
    key: &str,
) -> Result<Option<Vec<String>>, SirenError> {
    match get(obj, key) {
        None => Ok(None),
        Some(value) => string_list(value).map(Some),
    }
}

/// Read a required string-list attribute (`rel`).
pub(crate) fn required_string_list(
    obj: &Map<String, Value>,
    key: &'static str,
) -> Result<Vec<String>, SirenError> {
    let value = get(obj, key).ok_or(SirenError::MissingKey { key })?;
    string_list(value)
}

/// Read an optional object attribute (`properties`).
pub(crate) fn opt_object(
    obj: &Map<String, Value>,
    key: &str,
) -> Result<Option<Map<String, Value>>, SirenError> {
    match get(obj, key) {
        None => Ok(None),
        Some(value) => as_object(value).map(|map| Some(map.clone())),
    }
}

/// Read an optional array attribute, parsing each element with `parse`.
pub(crate) fn opt_list<T>(
    obj: &Map<String, Value>,
    key: &str,
    parse: impl Fn(&Value) -> Result<T, SirenError>,
) -> Result<Option<Vec<T>>, SirenError> {
    match get(obj, key) {
        None => Ok(None),
        Some(value) => {
            let items = as_array(value)?;
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(parse(item)?);
            }
            Ok(Some(out))
        }
    }
}

/// Parse an href, reporting the owning entity type on failure.
pub(crate) fn parse_href(value: &str, context: &'static str) -> Result<Href, SirenError> {
    value.parse::<Href>().map_err(|source| SirenError::InvalidUri {
        context,
        value: value.to_owned(),
        source,
    })
}

/// Drop all null-valued entries, preserving the order of the rest.
pub(crate) fn skip_nulls(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter().filter(|(_, value)| !value.is_null()).collect()
}

/// Root's omission policy: empty collections serialize as null so the
/// final [`skip_nulls`] pass drops them along with unset attributes.
/// The nested entity types keep explicitly set empty collections instead.
pub(crate) fn null_when_empty(value: Value) -> Value {
    let empty = match &value {
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    };
    if empty {
        Value::Null
    } else {
        value
    }
}

/// Serialized form of an optional string attribute.
pub(crate) fn opt_string_value(value: &Option<String>) -> Value {
    match value {
        Some(s) => Value::String(s.clone()),
        None => Value::Null,
    }
}

/// Serialized form of a string list.
pub(crate) fn string_list_value(items: &[String]) -> Value {
    Value::Array(items.iter().map(|s| Value::String(s.clone())).collect())
}

/// Serialized form of an optional string list.
pub(crate) fn opt_string_list_value(value: &Option<Vec<String>>) -> Value {
    match value {
        Some(items) => string_list_value(items),
        None => Value::Null,
    }
}

/// Serialized form of a list of raw-convertible values.
pub(crate) fn raw_list<T>(items: &[T], to_raw: impl Fn(&T) -> Map<String, Value>) -> Value {
    Value::Array(items.iter().map(|item| Value::Object(to_raw(item))).collect())
}

/// Serialized form of an optional list of raw-convertible values.
pub(crate) fn opt_raw_list<T>(
    items: &Option<Vec<T>>,
    to_raw: impl Fn(&T) -> Map<String, Value>,
) -> Value {
    match items {
        Some(items) => raw_list(items, to_raw),
        None => Value::Null,
    }
}
