// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::hash::{Hash, Hasher};

use serde_json::Value;

use super::currency::Currency;
use crate::connection::{set_of, FromNode, KeyedNode, MappedConnection, NodeSet};
use crate::decode::{as_object, optional_str, required_str};
use crate::error::ParseError;

/// ISO 3166-1 alpha-2 country with the currencies payable into it.
#[derive(Debug, Clone)]
pub struct Country {
    code: String,
    name: String,
    iso3: Option<String>,
    currencies: Option<MappedConnection<Currency>>,
}

impl Country {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// ISO 3166-1 alpha-3 code, when selected by the query.
    pub fn iso3(&self) -> Option<&str> {
        self.iso3.as_deref()
    }

    pub fn currencies(&self) -> NodeSet<'_, Currency> {
        set_of(self.currencies.as_deref())
    }

    pub fn currency(&self, code: &str) -> Option<&Currency> {
        self.currencies.as_ref()?.node(code)
    }

    pub fn has_currencies(&self) -> bool {
        self.currencies
            .as_ref()
            .is_some_and(|currencies| currencies.has_nodes())
    }
}

impl FromNode for Country {
    fn from_node(value: &Value, path: &str) -> Result<Self, ParseError> {
        let object = as_object(value, path)?;
        Ok(Self {
            code: required_str(object, "code", path)?.to_string(),
            name: required_str(object, "name", path)?.to_string(),
            iso3: optional_str(object, "iso3", path)?.map(str::to_string),
            currencies: MappedConnection::decode_field(object, "currencies", path)?,
        })
    }
}

impl KeyedNode for Country {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.name == other.name
    }
}

impl Eq for Country {}

impl Hash for Country {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.name.hash(state);
    }
}
