// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::time::Duration;

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use relational_payout_sdk::{
    ClientConfig, ConfigurationFieldsQuery, ConfigurationKeysQuery, GraphqlClient, GraphqlQuery,
    ParseError, ProfileType, SdkError,
};

fn client_for(server: &MockServer) -> GraphqlClient {
    let url = Url::parse(&format!("{}/graphql", server.uri())).unwrap();
    GraphqlClient::new(ClientConfig::new(url).with_timeout(Duration::from_secs(5))).unwrap()
}

#[tokio::test]
async fn configuration_keys_posts_exact_query_and_decodes_graph() {
    let server = MockServer::start().await;
    let expected_query = ConfigurationKeysQuery::new(ProfileType::Individual).to_query("tok-123");

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("Authorization", "Bearer tok-123"))
        .and(body_json(json!({ "query": expected_query })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "countries": { "nodes": [{
                "code": "CA",
                "name": "CANADA",
                "currencies": { "nodes": [{
                    "code": "CAD",
                    "name": "Canadian Dollar",
                    "transferMethodTypes": { "nodes": [
                        { "code": "BANK_ACCOUNT", "name": "Bank Account" },
                        { "code": "BANK_CARD", "name": "Debit Card" }
                    ] }
                }] }
            }] } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .configuration_keys("tok-123", ProfileType::Individual)
        .await
        .unwrap();

    let types = result.transfer_method_types("CA", "CAD").unwrap();
    assert_eq!(types.codes().collect::<Vec<_>>(), ["BANK_ACCOUNT", "BANK_CARD"]);
    assert!(result.transfer_method_types("CA", "USD").is_none());
}

#[tokio::test]
async fn graphql_errors_surface_as_platform_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [
                { "message": "Invalid idToken", "extensions": { "code": "UNAUTHENTICATED" } },
                { "message": "Something else" }
            ]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fee_and_processing_time("tok-123", "CA", "CAD")
        .await
        .unwrap_err();

    match err {
        SdkError::Platform(errors) => {
            assert_eq!(errors.len(), 2);
            assert_eq!(errors.errors()[0].code, "UNAUTHENTICATED");
            assert_eq!(errors.errors()[1].code, "EC_UNEXPECTED_EXCEPTION");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_success_status_is_reported_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .configuration_keys("tok-123", ProfileType::Business)
        .await
        .unwrap_err();

    match err {
        SdkError::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .configuration_keys("tok-123", ProfileType::Individual)
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::Parse(ParseError::Malformed(_))));
}

#[tokio::test]
async fn configuration_fields_resolve_fee_alias() {
    let server = MockServer::start().await;
    let query = ConfigurationFieldsQuery::new("US", "USD", "BANK_ACCOUNT", ProfileType::Individual);

    Mock::given(method("POST"))
        .and(body_json(json!({ "query": query.to_query("tok-123") })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "transferMethodUIConfigurations": { "nodes": [{
                    "country": "US",
                    "currency": "USD",
                    "transferMethodType": "BANK_ACCOUNT",
                    "profile": "INDIVIDUAL",
                    "fieldGroups": { "nodes": [{
                        "group": "ACCOUNT_INFORMATION",
                        "fields": [{ "name": "bankAccountId", "dataType": "TEXT", "isRequired": true }]
                    }] }
                }] },
                "fee": { "nodes": [{
                    "code": "US",
                    "name": "UNITED STATES",
                    "currencies": { "nodes": [{
                        "code": "USD",
                        "name": "United States Dollar",
                        "transferMethodTypes": { "nodes": [{
                            "code": "BANK_ACCOUNT",
                            "name": "Bank Account",
                            "processingTime": "1-3",
                            "fees": { "nodes": [{ "value": "2.00", "feeRateType": "FLAT" }] }
                        }] }
                    }] }
                }] }
            }
        })))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .configuration_fields("tok-123", &query)
        .await
        .unwrap();

    assert!(result.field("bankAccountId").is_some_and(|field| field.required()));
    assert_eq!(result.processing_time(), Some("1-3"));
    assert_eq!(result.fees().len(), 1);
}
