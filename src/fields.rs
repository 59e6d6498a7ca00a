// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Transfer Method Field Configuration
//!
//! Decodes the response of [`ConfigurationFieldsQuery`](crate::query::ConfigurationFieldsQuery):
//! the form fields a user must fill in to create a transfer method for one
//! country/currency/type/profile combination, plus the aliased `fee`
//! selection carrying fees and processing time for that same method type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::connection::{Connection, FromNode, MappedConnection, NodeSet};
use crate::decode::{as_object, field_path, leaf, required_str};
use crate::envelope::FromData;
use crate::error::ParseError;
use crate::graph::{Country, Fee, TransferMethodType};

/// Input widget type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    Text,
    Selection,
    Boolean,
    Number,
    Range,
    Date,
    Datetime,
    ExpiryDate,
    Phone,
    Email,
    File,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOption {
    pub label: String,
    pub value: String,
}

/// Messages shown when a field fails validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMessage {
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub empty: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub data_type: Option<DataType>,
    #[serde(default)]
    pub is_required: Option<bool>,
    #[serde(default)]
    pub is_editable: Option<bool>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub max_length: Option<u32>,
    #[serde(default)]
    pub min_length: Option<u32>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub regular_expression: Option<String>,
    #[serde(default)]
    pub field_selection_options: Option<Vec<SelectionOption>>,
    #[serde(default)]
    pub validation_message: Option<ValidationMessage>,
}

impl Field {
    pub fn data_type(&self) -> DataType {
        self.data_type.unwrap_or(DataType::Unknown)
    }

    pub fn required(&self) -> bool {
        self.is_required.unwrap_or(false)
    }

    /// Fields are editable unless the platform says otherwise.
    pub fn editable(&self) -> bool {
        self.is_editable.unwrap_or(true)
    }

    pub fn selection_options(&self) -> &[SelectionOption] {
        self.field_selection_options.as_deref().unwrap_or_default()
    }
}

/// Named group of fields, e.g. `ACCOUNT_INFORMATION`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGroup {
    pub group: String,
    #[serde(default)]
    pub fields: Option<Vec<Field>>,
}

impl FieldGroup {
    pub fn fields(&self) -> &[Field] {
        self.fields.as_deref().unwrap_or_default()
    }
}

impl FromNode for FieldGroup {
    fn from_node(value: &Value, path: &str) -> Result<Self, ParseError> {
        leaf(value, path)
    }
}

/// Field layout for one country/currency/type/profile combination.
#[derive(Debug, Clone)]
pub struct FieldConfiguration {
    country: String,
    currency: String,
    transfer_method_type: String,
    profile: String,
    field_groups: Option<Connection<FieldGroup>>,
}

impl FieldConfiguration {
    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn transfer_method_type(&self) -> &str {
        &self.transfer_method_type
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn field_groups(&self) -> &[FieldGroup] {
        self.field_groups
            .as_ref()
            .map(Connection::nodes)
            .unwrap_or_default()
    }
}

impl FromNode for FieldConfiguration {
    fn from_node(value: &Value, path: &str) -> Result<Self, ParseError> {
        let object = as_object(value, path)?;
        Ok(Self {
            country: required_str(object, "country", path)?.to_string(),
            currency: required_str(object, "currency", path)?.to_string(),
            transfer_method_type: required_str(object, "transferMethodType", path)?.to_string(),
            profile: required_str(object, "profile", path)?.to_string(),
            field_groups: Connection::decode_field(object, "fieldGroups", path)?,
        })
    }
}

/// Root aggregate of a field configuration response.
#[derive(Debug, Clone)]
pub struct ConfigurationFieldResult {
    configurations: Option<Connection<FieldConfiguration>>,
    fee: Option<MappedConnection<Country>>,
}

impl ConfigurationFieldResult {
    /// The configuration the query asked for; the platform returns at most one.
    pub fn configuration(&self) -> Option<&FieldConfiguration> {
        self.configurations.as_ref()?.first()
    }

    pub fn field_groups(&self) -> &[FieldGroup] {
        self.configuration()
            .map(FieldConfiguration::field_groups)
            .unwrap_or_default()
    }

    /// Every field across all groups, in response order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.field_groups().iter().flat_map(FieldGroup::fields)
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().find(|field| field.name == name)
    }

    /// Method type node from the `fee` selection matching the configuration.
    pub fn transfer_method_type(&self) -> Option<&TransferMethodType> {
        let configuration = self.configuration()?;
        self.fee
            .as_ref()?
            .node(configuration.country())?
            .currency(configuration.currency())?
            .transfer_method_type(configuration.transfer_method_type())
    }

    pub fn fees(&self) -> NodeSet<'_, Fee> {
        self.transfer_method_type()
            .map_or_else(NodeSet::empty, TransferMethodType::fees)
    }

    pub fn processing_time(&self) -> Option<&str> {
        self.transfer_method_type()?.processing_time()
    }
}

impl FromData for ConfigurationFieldResult {
    fn from_data(data: &Map<String, Value>, path: &str) -> Result<Self, ParseError> {
        let configurations: Option<Connection<FieldConfiguration>> =
            Connection::decode_field(data, "transferMethodUIConfigurations", path)?;
        let fee = MappedConnection::decode_field(data, "fee", path)?;
        debug!(
            path = %field_path(path, "transferMethodUIConfigurations"),
            configurations = configurations.as_ref().map_or(0, Connection::len),
            "Decoded field configuration"
        );
        Ok(Self { configurations, fee })
    }
}
