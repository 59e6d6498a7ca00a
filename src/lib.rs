// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Relational Payout SDK - transfer method configuration client
//!
//! This crate decodes the payout platform's GraphQL configuration responses
//! into an in-memory graph that supports both ordered iteration and keyed
//! lookup by country, currency and transfer method type code, and renders
//! the fixed query texts the platform accepts.
//!
//! ## Modules
//!
//! - `connection` - GraphQL connection decoding and code index
//! - `graph` - Country / Currency / TransferMethodType / Fee nodes
//! - `keys` - Configuration keys root aggregate and hierarchical lookups
//! - `fields` - Transfer method field configuration result
//! - `envelope` - GraphQL response envelope and platform errors
//! - `query` - Query text builders
//! - `client` - HTTP transport (reqwest)

pub mod client;
pub mod config;
pub mod connection;
pub mod decode;
pub mod envelope;
pub mod error;
pub mod fields;
pub mod graph;
pub mod keys;
pub mod query;
pub mod telemetry;

pub use client::GraphqlClient;
pub use config::ClientConfig;
pub use connection::{Connection, FromNode, KeyedNode, MappedConnection, NodeSet};
pub use envelope::{decode_envelope, decode_response, FromData};
pub use error::{ParseError, PlatformError, PlatformErrors, Result, SdkError};
pub use fields::{ConfigurationFieldResult, Field, FieldConfiguration, FieldGroup};
pub use graph::{Country, Currency, Fee, FeeRateType, ProcessingTime, TransferMethodType};
pub use keys::ConfigurationKeyResult;
pub use query::{
    ConfigurationFieldsQuery, ConfigurationKeysQuery, FeeAndProcessingTimeQuery, GraphqlQuery,
    ProfileType,
};
