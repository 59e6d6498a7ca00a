// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! GraphQL transport for the payout platform.
//!
//! Posts a rendered query and hands the body to the envelope decoder. The
//! auth token is supplied by the caller on every call; this client does not
//! acquire, cache or refresh tokens and never retries.

use reqwest::Client;
use tracing::info;
use url::Url;

use crate::config::ClientConfig;
use crate::envelope::decode_response;
use crate::error::{Result, SdkError};
use crate::fields::ConfigurationFieldResult;
use crate::keys::ConfigurationKeyResult;
use crate::query::{
    ConfigurationFieldsQuery, ConfigurationKeysQuery, FeeAndProcessingTimeQuery, GraphqlQuery,
    GraphqlRequest, ProfileType,
};

#[derive(Debug, Clone)]
pub struct GraphqlClient {
    graphql_url: Url,
    http: Client,
}

impl GraphqlClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SdkError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            graphql_url: config.graphql_url,
            http,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn graphql_url(&self) -> &Url {
        &self.graphql_url
    }

    /// Countries, currencies and transfer method types available to `profile`.
    pub async fn configuration_keys(
        &self,
        auth_token: &str,
        profile: ProfileType,
    ) -> Result<ConfigurationKeyResult> {
        self.execute(&ConfigurationKeysQuery::new(profile), auth_token)
            .await
    }

    pub async fn fee_and_processing_time(
        &self,
        auth_token: &str,
        country: &str,
        currency: &str,
    ) -> Result<ConfigurationKeyResult> {
        self.execute(&FeeAndProcessingTimeQuery::new(country, currency), auth_token)
            .await
    }

    pub async fn configuration_fields(
        &self,
        auth_token: &str,
        query: &ConfigurationFieldsQuery,
    ) -> Result<ConfigurationFieldResult> {
        self.execute(query, auth_token).await
    }

    /// Sends `query` and decodes its typed result.
    pub async fn execute<Q: GraphqlQuery>(&self, query: &Q, auth_token: &str) -> Result<Q::Output> {
        let request = GraphqlRequest::new(query, auth_token);

        info!(
            operation = Q::OPERATION_NAME,
            url = %self.graphql_url,
            "Sending GraphQL query"
        );

        let response = self
            .http
            .post(self.graphql_url.clone())
            .header("Authorization", format!("Bearer {auth_token}"))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                SdkError::Transport(format!("POST {} failed: {e}", Q::OPERATION_NAME))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SdkError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(|e| {
            SdkError::Transport(format!("reading {} response failed: {e}", Q::OPERATION_NAME))
        })?;

        decode_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_configured_endpoint() {
        let url = Url::parse("https://api.example.com/graphql").unwrap();
        let client = GraphqlClient::new(ClientConfig::new(url.clone())).unwrap();
        assert_eq!(client.graphql_url(), &url);
    }
}
