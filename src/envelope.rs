// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! GraphQL response envelope.
//!
//! A response is `{"data": {...}, "errors": [...]}`. A non-empty `errors`
//! array takes precedence: it is returned as [`SdkError::Platform`] and
//! `data` is never decoded, even if partially present.

use serde_json::{Map, Value};
use tracing::warn;

use crate::decode::field_path;
use crate::error::{ParseError, PlatformError, PlatformErrors, Result, SdkError};

/// Root aggregate decodable from the `data` object of a response.
pub trait FromData: Sized {
    fn from_data(data: &Map<String, Value>, path: &str) -> Result<Self, ParseError>;
}

/// Decodes a raw response body.
pub fn decode_response<R: FromData>(body: &[u8]) -> Result<R> {
    let envelope: Value = serde_json::from_slice(body).map_err(ParseError::Malformed)?;
    decode_envelope(&envelope)
}

/// Decodes an already-parsed response envelope.
pub fn decode_envelope<R: FromData>(envelope: &Value) -> Result<R> {
    if let Some(errors) = platform_errors(envelope) {
        warn!(count = errors.len(), errors = %errors, "Platform returned GraphQL errors");
        return Err(SdkError::Platform(errors));
    }

    let data = match envelope.get("data") {
        None | Some(Value::Null) => return Err(ParseError::missing("$", "data").into()),
        Some(Value::Object(data)) => data,
        Some(_) => return Err(ParseError::invalid_type("$", "data", "an object").into()),
    };

    Ok(R::from_data(data, &field_path("", "data"))?)
}

fn platform_errors(envelope: &Value) -> Option<PlatformErrors> {
    let raw = envelope.get("errors")?.as_array()?;
    if raw.is_empty() {
        return None;
    }
    Some(PlatformErrors(
        raw.iter().map(PlatformError::from_graphql).collect(),
    ))
}
