// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Field readers shared by the node decoders.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ParseError;

/// Path of `key` below `path`.
pub fn field_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Path of array element `index` below `path`.
pub fn index_path(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

pub fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ParseError> {
    value.as_object().ok_or_else(|| ParseError::InvalidType {
        path: path.to_string(),
        field: "node".to_string(),
        expected: "an object",
    })
}

pub fn required_str<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a str, ParseError> {
    match object.get(key) {
        None | Some(Value::Null) => Err(ParseError::missing(path, key)),
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(ParseError::invalid_type(path, key, "a string")),
    }
}

pub fn optional_str<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<&'a str>, ParseError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(ParseError::invalid_type(path, key, "a string")),
    }
}

/// Decodes a flat leaf object through its serde representation.
pub fn leaf<T: DeserializeOwned>(value: &Value, path: &str) -> Result<T, ParseError> {
    T::deserialize(value).map_err(|source| ParseError::Json {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn paths_compose() {
        let path = field_path("data", "countries");
        let path = field_path(&index_path(&field_path(&path, "nodes"), 3), "code");
        assert_eq!(path, "data.countries.nodes[3].code");
        assert_eq!(field_path("", "data"), "data");
    }

    #[test]
    fn required_str_distinguishes_missing_from_mistyped() {
        let value = json!({ "code": 7, "name": null });
        let object = value.as_object().unwrap();

        assert!(matches!(
            required_str(object, "code", "$"),
            Err(ParseError::InvalidType { .. })
        ));
        assert!(matches!(
            required_str(object, "name", "$"),
            Err(ParseError::MissingField { .. })
        ));
        assert_eq!(optional_str(object, "iso3", "$").unwrap(), None);
    }
}
