// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Error taxonomy for response decoding and transport.
//!
//! Decode failures are fatal to the one decode that raised them and are
//! reported once. A lookup that finds nothing is not an error: the graph
//! accessors return `None` for it.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Code assigned to a platform error that carries no `extensions.code`.
pub const UNEXPECTED_EXCEPTION_CODE: &str = "EC_UNEXPECTED_EXCEPTION";

/// A required field was missing or a node could not be decoded.
///
/// `path` is a JSON path into the response, e.g.
/// `data.countries.nodes[1].currencies.nodes[0]`.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("missing required field `{field}` at {path}")]
    MissingField { path: String, field: String },

    #[error("field `{field}` at {path} is not {expected}")]
    InvalidType {
        path: String,
        field: String,
        expected: &'static str,
    },

    #[error("invalid node at {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("response body is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),
}

impl ParseError {
    pub fn missing(path: &str, field: &str) -> Self {
        Self::MissingField {
            path: path.to_string(),
            field: field.to_string(),
        }
    }

    pub fn invalid_type(path: &str, field: &str, expected: &'static str) -> Self {
        Self::InvalidType {
            path: path.to_string(),
            field: field.to_string(),
            expected,
        }
    }

    /// JSON path of the offending node, if the error has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            ParseError::MissingField { path, .. }
            | ParseError::InvalidType { path, .. }
            | ParseError::Json { path, .. } => Some(path),
            ParseError::Malformed(_) => None,
        }
    }
}

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformError {
    pub code: String,
    pub message: String,
}

impl PlatformError {
    /// Reads `message` and `extensions.code` from a raw GraphQL error object.
    pub fn from_graphql(raw: &Value) -> Self {
        let message = raw
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let code = raw
            .pointer("/extensions/code")
            .and_then(Value::as_str)
            .filter(|code| !code.trim().is_empty())
            .unwrap_or(UNEXPECTED_EXCEPTION_CODE)
            .to_string();
        Self { code, message }
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// The error list the platform returned in place of usable data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformErrors(pub Vec<PlatformError>);

impl PlatformErrors {
    pub fn errors(&self) -> &[PlatformError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if any entry carries the given code.
    pub fn contains_code(&self, code: &str) -> bool {
        self.0.iter().any(|error| error.code == code)
    }
}

impl fmt::Display for PlatformErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

/// Crate-level error.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    #[error("platform returned errors: {0}")]
    Platform(PlatformErrors),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("request returned {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("configuration missing: {0}")]
    MissingConfig(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T, E = SdkError> = std::result::Result<T, E>;
