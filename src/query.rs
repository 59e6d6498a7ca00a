// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # GraphQL Query Builders
//!
//! Each builder renders one fixed query template with its parameters
//! substituted in order. The template text (field order, whitespace and
//! line breaks) is part of the platform contract: the platform matches
//! incoming queries against an allow-list, so identical parameters must
//! always render byte-identical text.
//!
//! | Builder | Placeholders, in order |
//! |---------|------------------------|
//! | [`ConfigurationKeysQuery`] | token, limit, profile |
//! | [`FeeAndProcessingTimeQuery`] | token, country, currency |
//! | [`ConfigurationFieldsQuery`] | token, profile, country, currency, type, then token, country, currency, type for the `fee` alias |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::envelope::FromData;
use crate::fields::ConfigurationFieldResult;
use crate::keys::ConfigurationKeyResult;

/// Default number of countries requested per page.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

const PLACEHOLDER: &str = "%s";

const CONFIGURATION_KEYS_TEMPLATE: &str = r#"query {
  countries(idToken: "%s", limit: %s) {
    count
    nodes {
      code
      name
      iso3
      currencies {
        nodes {
          code
          name
          transferMethodTypes(profile: "%s") {
            nodes {
              code
              name
            }
          }
        }
      }
    }
  }
}"#;

const FEE_AND_PROCESSING_TIME_TEMPLATE: &str = r#"query {
  countries(idToken: "%s", code: "%s") {
    nodes {
      code
      name
      currencies(code: "%s") {
        nodes {
          code
          name
          transferMethodTypes {
            nodes {
              code
              name
              processingTimes {
                nodes {
                  country
                  currency
                  transferMethodType
                  value
                }
              }
              fees {
                nodes {
                  currency
                  feeRateType
                  value
                  minimum
                  maximum
                }
              }
            }
          }
        }
      }
    }
  }
}"#;

const CONFIGURATION_FIELDS_TEMPLATE: &str = r#"query {
  transferMethodUIConfigurations(
    idToken: "%s"
    profile: "%s"
    country: "%s"
    currency: "%s"
    transferMethodType: "%s"
  ) {
    nodes {
      country
      currency
      transferMethodType
      profile
      fieldGroups {
        nodes {
          group
          fields {
            category
            dataType
            isRequired
            isEditable
            label
            maxLength
            minLength
            name
            placeholder
            regularExpression
            fieldSelectionOptions {
              label
              value
            }
            validationMessage {
              length
              pattern
              empty
            }
          }
        }
      }
    }
  }
  fee: countries(idToken: "%s", code: "%s") {
    nodes {
      code
      name
      currencies(code: "%s") {
        nodes {
          code
          name
          transferMethodTypes(code: "%s") {
            nodes {
              code
              name
              processingTimes {
                nodes {
                  country
                  currency
                  transferMethodType
                  value
                }
              }
              fees {
                nodes {
                  currency
                  feeRateType
                  value
                  minimum
                  maximum
                }
              }
            }
          }
        }
      }
    }
  }
}"#;

/// Account holder profile a configuration applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileType {
    Individual,
    Business,
}

impl ProfileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileType::Individual => "INDIVIDUAL",
            ProfileType::Business => "BUSINESS",
        }
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query with a fixed template and a typed result.
pub trait GraphqlQuery {
    /// Root aggregate decoded from the response `data`.
    type Output: FromData;

    /// Operation name used in logs.
    const OPERATION_NAME: &'static str;

    /// Renders the query text for `auth_token`.
    fn to_query(&self, auth_token: &str) -> String;
}

/// Body of a GraphQL POST request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlRequest {
    pub query: String,
}

impl GraphqlRequest {
    pub fn new<Q: GraphqlQuery>(query: &Q, auth_token: &str) -> Self {
        Self {
            query: query.to_query(auth_token),
        }
    }
}

/// Countries, their currencies and the transfer method types offered for
/// each, filtered by profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationKeysQuery {
    profile: ProfileType,
    limit: u32,
}

impl ConfigurationKeysQuery {
    pub fn new(profile: ProfileType) -> Self {
        Self {
            profile,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn profile(&self) -> ProfileType {
        self.profile
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl GraphqlQuery for ConfigurationKeysQuery {
    type Output = ConfigurationKeyResult;

    const OPERATION_NAME: &'static str = "TransferMethodConfigurationKeys";

    fn to_query(&self, auth_token: &str) -> String {
        render(
            CONFIGURATION_KEYS_TEMPLATE,
            &[
                &escape(auth_token),
                &self.limit.to_string(),
                self.profile.as_str(),
            ],
        )
    }
}

/// Fees and processing times of every transfer method type for one
/// country/currency pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeAndProcessingTimeQuery {
    country: String,
    currency: String,
}

impl FeeAndProcessingTimeQuery {
    /// Codes are substituted into the query exactly as given.
    pub fn new(country: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            currency: currency.into(),
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl GraphqlQuery for FeeAndProcessingTimeQuery {
    type Output = ConfigurationKeyResult;

    const OPERATION_NAME: &'static str = "TransferMethodFeeAndProcessingTime";

    fn to_query(&self, auth_token: &str) -> String {
        render(
            FEE_AND_PROCESSING_TIME_TEMPLATE,
            &[
                &escape(auth_token),
                &escape(&self.country),
                &escape(&self.currency),
            ],
        )
    }
}

/// Form fields for one transfer method type, with its fee and processing
/// time under the `fee` alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationFieldsQuery {
    country: String,
    currency: String,
    transfer_method_type: String,
    profile: ProfileType,
}

impl ConfigurationFieldsQuery {
    /// Codes are substituted into the query exactly as given.
    pub fn new(
        country: impl Into<String>,
        currency: impl Into<String>,
        transfer_method_type: impl Into<String>,
        profile: ProfileType,
    ) -> Self {
        Self {
            country: country.into(),
            currency: currency.into(),
            transfer_method_type: transfer_method_type.into(),
            profile,
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn transfer_method_type(&self) -> &str {
        &self.transfer_method_type
    }

    pub fn profile(&self) -> ProfileType {
        self.profile
    }
}

impl GraphqlQuery for ConfigurationFieldsQuery {
    type Output = ConfigurationFieldResult;

    const OPERATION_NAME: &'static str = "TransferMethodConfigurationFields";

    fn to_query(&self, auth_token: &str) -> String {
        let token = escape(auth_token);
        let country = escape(&self.country);
        let currency = escape(&self.currency);
        let transfer_method_type = escape(&self.transfer_method_type);
        render(
            CONFIGURATION_FIELDS_TEMPLATE,
            &[
                &token,
                self.profile.as_str(),
                &country,
                &currency,
                &transfer_method_type,
                &token,
                &country,
                &currency,
                &transfer_method_type,
            ],
        )
    }
}

/// Escapes a value for use inside a GraphQL string literal.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{0}'..='\u{1f}' => {
                escaped.push_str(&format!("\\u{:04X}", u32::from(c)));
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Substitutes `args` into the placeholders of `template`, left to right.
fn render(template: &str, args: &[&str]) -> String {
    debug_assert_eq!(template.matches(PLACEHOLDER).count(), args.len());

    let capacity = template.len() + args.iter().map(|arg| arg.len()).sum::<usize>();
    let mut rendered = String::with_capacity(capacity);
    let mut parts = template.split(PLACEHOLDER);
    if let Some(head) = parts.next() {
        rendered.push_str(head);
    }
    for (part, arg) in parts.zip(args) {
        rendered.push_str(arg);
        rendered.push_str(part);
    }
    rendered
}
