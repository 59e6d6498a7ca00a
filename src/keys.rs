// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Transfer Method Configuration Keys
//!
//! Root aggregate of a configuration keys response. It owns the whole
//! country → currency → transfer method type tree decoded from one
//! response and answers hierarchical lookups by chaining code lookups.
//! Each hop returns `None` when the code is unknown; only decoding fails.

use serde_json::{Map, Value};
use tracing::debug;

use crate::connection::{set_of, MappedConnection, NodeSet};
use crate::envelope::FromData;
use crate::error::ParseError;
use crate::graph::{Country, Currency, Fee, TransferMethodType};

#[derive(Debug, Clone)]
pub struct ConfigurationKeyResult {
    countries: Option<MappedConnection<Country>>,
}

impl ConfigurationKeyResult {
    pub fn countries(&self) -> NodeSet<'_, Country> {
        set_of(self.countries.as_deref())
    }

    pub fn country(&self, country_code: &str) -> Option<&Country> {
        self.countries.as_ref()?.node(country_code)
    }

    /// `None` when the country is not configured.
    pub fn currencies(&self, country_code: &str) -> Option<NodeSet<'_, Currency>> {
        self.country(country_code).map(Country::currencies)
    }

    pub fn currency(&self, country_code: &str, currency_code: &str) -> Option<&Currency> {
        self.country(country_code)?.currency(currency_code)
    }

    /// `None` when either the country or the currency is not configured.
    pub fn transfer_method_types(
        &self,
        country_code: &str,
        currency_code: &str,
    ) -> Option<NodeSet<'_, TransferMethodType>> {
        self.currency(country_code, currency_code)
            .map(Currency::transfer_method_types)
    }

    pub fn transfer_method_type(
        &self,
        country_code: &str,
        currency_code: &str,
        transfer_method_type: &str,
    ) -> Option<&TransferMethodType> {
        self.currency(country_code, currency_code)?
            .transfer_method_type(transfer_method_type)
    }

    pub fn fees(
        &self,
        country_code: &str,
        currency_code: &str,
        transfer_method_type: &str,
    ) -> Option<NodeSet<'_, Fee>> {
        self.transfer_method_type(country_code, currency_code, transfer_method_type)
            .map(TransferMethodType::fees)
    }

    pub fn processing_time(
        &self,
        country_code: &str,
        currency_code: &str,
        transfer_method_type: &str,
    ) -> Option<&str> {
        self.transfer_method_type(country_code, currency_code, transfer_method_type)?
            .processing_time()
    }
}

impl FromData for ConfigurationKeyResult {
    fn from_data(data: &Map<String, Value>, path: &str) -> Result<Self, ParseError> {
        let countries: Option<MappedConnection<Country>> =
            MappedConnection::decode_field(data, "countries", path)?;
        debug!(
            countries = countries.as_ref().map_or(0, |countries| countries.len()),
            "Decoded configuration keys"
        );
        Ok(Self { countries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::decode_envelope;
    use crate::error::SdkError;
    use serde_json::json;

    fn sample() -> ConfigurationKeyResult {
        decode_envelope(&json!({
            "data": {
                "countries": {
                    "nodes": [
                        {
                            "code": "CA",
                            "name": "CANADA",
                            "currencies": { "nodes": [
                                {
                                    "code": "CAD",
                                    "name": "Canadian Dollar",
                                    "transferMethodTypes": { "nodes": [
                                        {
                                            "code": "BANK_ACCOUNT",
                                            "name": "Bank Account",
                                            "fees": { "nodes": [
                                                { "value": "2.20", "feeRateType": "FLAT", "currency": "CAD" }
                                            ] },
                                            "processingTimes": { "nodes": [
                                                { "country": "CA", "currency": "CAD", "transferMethodType": "BANK_ACCOUNT", "value": "1-2 Business days" }
                                            ] }
                                        },
                                        {
                                            "code": "BANK_CARD",
                                            "name": "Debit Card",
                                            "fees": { "nodes": [
                                                { "value": "1.75", "feeRateType": "FLAT", "currency": "CAD" }
                                            ] }
                                        }
                                    ] }
                                },
                                {
                                    "code": "USD",
                                    "name": "United States Dollar",
                                    "transferMethodTypes": { "nodes": [
                                        { "code": "BANK_ACCOUNT", "name": "Bank Account" }
                                    ] }
                                }
                            ] }
                        },
                        {
                            "code": "US",
                            "name": "UNITED STATES",
                            "currencies": { "nodes": [
                                {
                                    "code": "USD",
                                    "name": "United States Dollar",
                                    "transferMethodTypes": { "nodes": [
                                        { "code": "PAPER_CHECK", "name": "Paper Check", "processingTime": "5-7" },
                                        { "code": "WIRE_ACCOUNT", "name": "Wire Transfer", "processingTime": "1" }
                                    ] }
                                }
                            ] }
                        }
                    ]
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn countries_view_lists_every_country() {
        let result = sample();
        let codes: Vec<_> = result.countries().codes().collect();
        assert_eq!(codes, ["CA", "US"]);
    }

    #[test]
    fn currencies_by_country() {
        let result = sample();
        let currencies = result.currencies("CA").expect("CA is configured");
        assert_eq!(currencies.codes().collect::<Vec<_>>(), ["CAD", "USD"]);
        assert!(result.currencies("MX").is_none());
    }

    #[test]
    fn transfer_method_types_by_country_and_currency() {
        let result = sample();
        let types = result.transfer_method_types("US", "USD").unwrap();
        assert_eq!(types.len(), 2);
        assert_eq!(types.codes().collect::<Vec<_>>(), ["PAPER_CHECK", "WIRE_ACCOUNT"]);

        assert!(result.transfer_method_types("US", "CAD").is_none());
        assert!(result.transfer_method_types("FR", "EUR").is_none());
    }

    #[test]
    fn fees_and_processing_time_by_full_key() {
        let result = sample();
        let fees = result.fees("CA", "CAD", "BANK_ACCOUNT").unwrap();
        assert_eq!(fees.len(), 1);
        assert_eq!(fees.iter().next().map(|fee| fee.value.as_str()), Some("2.20"));
        assert_eq!(
            result.processing_time("CA", "CAD", "BANK_ACCOUNT"),
            Some("1-2 Business days")
        );
        assert_eq!(result.processing_time("CA", "CAD", "BANK_CARD"), None);
        assert_eq!(result.processing_time("US", "USD", "PAPER_CHECK"), Some("5-7"));
        assert!(result.fees("CA", "CAD", "PAYPAL_ACCOUNT").is_none());
    }

    #[test]
    fn lookup_returns_same_node_as_iteration() {
        let result = sample();
        let by_code = result.country("US").unwrap();
        let by_iteration = result.countries().iter().nth(1).unwrap();
        assert!(std::ptr::eq(by_code, by_iteration));
    }

    #[test]
    fn missing_countries_field_yields_empty_result() {
        let result: ConfigurationKeyResult = decode_envelope(&json!({ "data": {} })).unwrap();
        assert!(result.countries().is_empty());
        assert!(result.country("CA").is_none());
        assert!(result.currencies("CA").is_none());
    }

    #[test]
    fn platform_errors_skip_node_decode() {
        let err = decode_envelope::<ConfigurationKeyResult>(&json!({
            "errors": [
                { "message": "Invalid idToken", "extensions": { "code": "UNAUTHENTICATED" } }
            ]
        }))
        .unwrap_err();
        match err {
            SdkError::Platform(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.contains_code("UNAUTHENTICATED"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_node_fails_whole_result() {
        let err = decode_envelope::<ConfigurationKeyResult>(&json!({
            "data": { "countries": { "nodes": [
                { "code": "CA", "name": "CANADA" },
                { "name": "UNITED STATES" }
            ] } }
        }))
        .unwrap_err();
        match err {
            SdkError::Parse(parse) => assert_eq!(parse.path(), Some("data.countries.nodes[1]")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn pagination_links_never_block_the_graph() {
        for link in [
            json!({ "params": { "rel": "next" }, "href": "/graphql?offset=100" }),
            json!({ "params": { "rel": "next" } }),
        ] {
            let result: ConfigurationKeyResult = decode_envelope(&json!({
                "data": { "countries": {
                    "links": [link],
                    "nodes": [{ "code": "CA", "name": "CANADA" }]
                } }
            }))
            .unwrap();

            assert_eq!(result.country("CA").map(|country| country.name()), Some("CANADA"));
            assert_eq!(result.countries().len(), 1);
        }
    }
}
