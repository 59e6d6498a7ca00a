// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Environment variable names and defaults read by the SDK. Values are
//! trimmed; a blank value counts as unset.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `PAYOUT_GRAPHQL_URL` | GraphQL endpoint of the payout platform | Required |
//! | `PAYOUT_HTTP_TIMEOUT_SECS` | Request timeout in seconds | `15` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

use std::time::Duration;

use url::Url;

use crate::error::SdkError;

/// Environment variable name for the platform GraphQL endpoint.
pub const GRAPHQL_URL_ENV: &str = "PAYOUT_GRAPHQL_URL";

/// Environment variable name for the HTTP request timeout.
pub const HTTP_TIMEOUT_ENV: &str = "PAYOUT_HTTP_TIMEOUT_SECS";

/// Environment variable name for the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(15);

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings for [`GraphqlClient`](crate::client::GraphqlClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub graphql_url: Url,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(graphql_url: Url) -> Self {
        Self {
            graphql_url,
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_values(
            &env_required(GRAPHQL_URL_ENV)?,
            env_optional(HTTP_TIMEOUT_ENV).as_deref(),
        )
    }

    fn from_values(raw_url: &str, raw_timeout: Option<&str>) -> Result<Self, SdkError> {
        let graphql_url = Url::parse(raw_url).map_err(|e| {
            SdkError::InvalidConfig(format!("{GRAPHQL_URL_ENV} is not a valid URL: {e}"))
        })?;

        let timeout = match raw_timeout {
            None => DEFAULT_HTTP_TIMEOUT,
            Some(raw) => raw.parse::<u64>().map(Duration::from_secs).map_err(|e| {
                SdkError::InvalidConfig(format!(
                    "{HTTP_TIMEOUT_ENV} must be a number of seconds: {e}"
                ))
            })?,
        };

        Ok(Self {
            graphql_url,
            timeout,
        })
    }
}

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn from_env() -> Self {
        Self::parse(env_optional(LOG_FORMAT_ENV).as_deref())
    }

    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

fn env_required(name: &str) -> Result<String, SdkError> {
    env_optional(name).ok_or_else(|| SdkError::MissingConfig(name.to_string()))
}

fn env_optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
