// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Fee and processing-time leaves of the transfer method graph.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::connection::FromNode;
use crate::decode::leaf;
use crate::error::ParseError;

/// How a fee `value` is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeRateType {
    /// Fixed amount in the fee currency.
    Flat,
    /// Percentage of the transfer amount.
    Percent,
    #[serde(other)]
    Unknown,
}

/// A fee quoted for a transfer method type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    pub value: String,
    pub fee_rate_type: FeeRateType,
    #[serde(default)]
    pub minimum: Option<String>,
    #[serde(default)]
    pub maximum: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub transfer_method_type: Option<String>,
}

impl Fee {
    pub fn is_flat(&self) -> bool {
        self.fee_rate_type == FeeRateType::Flat
    }

    pub fn is_percent(&self) -> bool {
        self.fee_rate_type == FeeRateType::Percent
    }

    /// True if either a minimum or maximum bound is quoted.
    pub fn is_bounded(&self) -> bool {
        self.minimum.is_some() || self.maximum.is_some()
    }
}

impl FromNode for Fee {
    fn from_node(value: &Value, path: &str) -> Result<Self, ParseError> {
        leaf(value, path)
    }
}

/// One country/currency-scoped processing-time quote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingTimeRecord {
    pub value: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub transfer_method_type: Option<String>,
}

impl FromNode for ProcessingTimeRecord {
    fn from_node(value: &Value, path: &str) -> Result<Self, ParseError> {
        leaf(value, path)
    }
}
