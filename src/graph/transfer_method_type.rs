// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transfer method type node.
//!
//! The platform quotes processing time in one of two shapes:
//!
//! - `processingTimes`: a connection of country/currency-scoped records,
//!   of which the first is the quote for this node.
//! - `processingTime`: a single string.
//!
//! [`ProcessingTime`] records which shape was decoded. When a payload carries
//! both keys the connection is used.

use std::hash::{Hash, Hasher};

use serde_json::Value;

use super::fee::{Fee, ProcessingTimeRecord};
use crate::connection::{set_of, Connection, FromNode, KeyedNode, NodeSet};
use crate::decode::{as_object, optional_str, required_str};
use crate::error::ParseError;

#[derive(Debug, Clone, Default)]
pub enum ProcessingTime {
    Scalar(String),
    Records(Connection<ProcessingTimeRecord>),
    #[default]
    Absent,
}

impl ProcessingTime {
    fn decode(object: &serde_json::Map<String, Value>, path: &str) -> Result<Self, ParseError> {
        if let Some(records) = Connection::decode_field(object, "processingTimes", path)? {
            return Ok(ProcessingTime::Records(records));
        }
        Ok(optional_str(object, "processingTime", path)?
            .map(|value| ProcessingTime::Scalar(value.to_string()))
            .unwrap_or_default())
    }

    /// The quoted value: the scalar, or the first record's value.
    pub fn value(&self) -> Option<&str> {
        match self {
            ProcessingTime::Scalar(value) => Some(value),
            ProcessingTime::Records(records) => records.first().map(|record| record.value.as_str()),
            ProcessingTime::Absent => None,
        }
    }
}

/// A payout instrument category offered for a country/currency pair.
///
/// Two nodes are equal when code, name and processing time match; fees do
/// not take part.
#[derive(Debug, Clone)]
pub struct TransferMethodType {
    code: String,
    name: String,
    fees: Option<Connection<Fee>>,
    processing_time: ProcessingTime,
}

impl TransferMethodType {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fees(&self) -> NodeSet<'_, Fee> {
        set_of(self.fees.as_ref())
    }

    /// Fees in response order, duplicates included.
    pub fn fee_connection(&self) -> Option<&Connection<Fee>> {
        self.fees.as_ref()
    }

    pub fn processing_time(&self) -> Option<&str> {
        self.processing_time.value()
    }

    pub fn processing_time_variant(&self) -> &ProcessingTime {
        &self.processing_time
    }
}

impl FromNode for TransferMethodType {
    fn from_node(value: &Value, path: &str) -> Result<Self, ParseError> {
        let object = as_object(value, path)?;
        let code = required_str(object, "code", path)?.to_string();
        let name = required_str(object, "name", path)?.to_string();
        let fees = Connection::decode_field(object, "fees", path)?;
        let processing_time = ProcessingTime::decode(object, path)?;

        Ok(Self {
            code,
            name,
            fees,
            processing_time,
        })
    }
}

impl KeyedNode for TransferMethodType {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for TransferMethodType {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.name == other.name
            && self.processing_time() == other.processing_time()
    }
}

impl Eq for TransferMethodType {}

impl Hash for TransferMethodType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.name.hash(state);
        self.processing_time().hash(state);
    }
}
