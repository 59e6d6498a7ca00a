// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::hash::{Hash, Hasher};

use serde_json::Value;

use super::transfer_method_type::TransferMethodType;
use crate::connection::{set_of, FromNode, KeyedNode, MappedConnection, NodeSet};
use crate::decode::{as_object, required_str};
use crate::error::ParseError;

/// ISO 4217 currency offered in a country, with its transfer method types.
#[derive(Debug, Clone)]
pub struct Currency {
    code: String,
    name: String,
    transfer_method_types: Option<MappedConnection<TransferMethodType>>,
}

impl Currency {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transfer_method_types(&self) -> NodeSet<'_, TransferMethodType> {
        set_of(self.transfer_method_types.as_deref())
    }

    pub fn transfer_method_type(&self, code: &str) -> Option<&TransferMethodType> {
        self.transfer_method_types.as_ref()?.node(code)
    }

    pub fn has_transfer_method_types(&self) -> bool {
        self.transfer_method_types
            .as_ref()
            .is_some_and(|types| types.has_nodes())
    }
}

impl FromNode for Currency {
    fn from_node(value: &Value, path: &str) -> Result<Self, ParseError> {
        let object = as_object(value, path)?;
        Ok(Self {
            code: required_str(object, "code", path)?.to_string(),
            name: required_str(object, "name", path)?.to_string(),
            transfer_method_types: MappedConnection::decode_field(
                object,
                "transferMethodTypes",
                path,
            )?,
        })
    }
}

impl KeyedNode for Currency {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.name == other.name
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_transfer_method_types_by_code() {
        let currency = Currency::from_node(
            &json!({
                "code": "USD",
                "name": "United States Dollar",
                "transferMethodTypes": { "nodes": [
                    { "code": "BANK_ACCOUNT", "name": "Bank Account", "processingTime": "1-3" },
                    { "code": "PAPER_CHECK", "name": "Paper Check", "processingTime": "5-7" }
                ] }
            }),
            "currency",
        )
        .unwrap();

        assert_eq!(currency.transfer_method_types().len(), 2);
        assert_eq!(
            currency
                .transfer_method_type("PAPER_CHECK")
                .and_then(TransferMethodType::processing_time),
            Some("5-7")
        );
        assert!(currency.transfer_method_type("WIRE_ACCOUNT").is_none());
        assert!(currency.has_transfer_method_types());
    }

    #[test]
    fn absent_transfer_method_types_yield_empty_view() {
        let currency =
            Currency::from_node(&json!({ "code": "CAD", "name": "Canadian Dollar" }), "c").unwrap();
        assert!(currency.transfer_method_types().is_empty());
        assert!(currency.transfer_method_type("BANK_ACCOUNT").is_none());
        assert!(!currency.has_transfer_method_types());
    }

    #[test]
    fn equality_is_code_and_name() {
        let bare = Currency::from_node(&json!({ "code": "CAD", "name": "Canadian Dollar" }), "c").unwrap();
        let full = Currency::from_node(
            &json!({
                "code": "CAD",
                "name": "Canadian Dollar",
                "transferMethodTypes": { "nodes": [{ "code": "BANK_ACCOUNT", "name": "Bank Account" }] }
            }),
            "c",
        )
        .unwrap();
        assert_eq!(bare, full);
    }

    #[test]
    fn missing_name_fails() {
        let err = Currency::from_node(&json!({ "code": "CAD" }), "currencies.nodes[0]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required field `name` at currencies.nodes[0]"
        );
    }
}
