// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # GraphQL Connections
//!
//! A GraphQL connection is an object holding an ordered `nodes` array and,
//! optionally, pagination `links` and a `count`. [`Connection`] decodes one
//! into an ordered `Vec<T>`; [`MappedConnection`] additionally indexes the
//! nodes by their business code for O(1) lookup.
//!
//! ## Absent vs. empty
//!
//! `Connection::decode*` returns `Ok(None)` when the field is missing, null,
//! an empty object, or an object without a `nodes` key. An explicit
//! `"nodes": []` decodes to a present connection with zero nodes. Accessors
//! treat both cases as "no nodes".
//!
//! ## Derived sets
//!
//! [`Connection::as_set`] returns a deduplicated view of the nodes. The view
//! is built on first request and cached for the lifetime of the connection.
//! The cache is a `OnceLock`, so concurrent first reads may compute the same
//! positions twice but only one result is stored.
//!
//! ## Links
//!
//! `links` is pagination metadata. A link entry that is not an object or has
//! no string `href` is dropped with a warning and never fails the nodes it
//! travels with. Hrefs are kept as sent; [`Link::resolve`] turns relative
//! ones into absolute URLs against the endpoint.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::ops::Deref;
use std::sync::OnceLock;

use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use crate::decode::{as_object, field_path, index_path};
use crate::error::ParseError;

/// Decodes one JSON object into a node.
///
/// Implemented once per node type; connections call it for every element
/// of their `nodes` array.
pub trait FromNode: Sized {
    fn from_node(value: &Value, path: &str) -> Result<Self, ParseError>;
}

/// A node addressable by a stable business code.
pub trait KeyedNode {
    /// Machine key (ISO country/currency code, method type code).
    fn code(&self) -> &str;
    /// Display label.
    fn name(&self) -> &str;
}

/// Factory used by [`Connection::decode_with`].
pub type DecodeFn<T> = fn(&Value, &str) -> Result<T, ParseError>;

/// Pagination link attached to a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub rel: Option<String>,
    /// Href exactly as the platform sent it, absolute or relative.
    pub href: String,
}

impl Link {
    /// Resolves `href` against `base`. Absolute hrefs ignore the base.
    pub fn resolve(&self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(&self.href)
    }
}

/// Ordered sequence of decoded nodes.
#[derive(Debug, Clone)]
pub struct Connection<T> {
    nodes: Vec<T>,
    links: Vec<Link>,
    count: Option<u64>,
    set: OnceLock<Vec<usize>>,
}

impl<T> Connection<T> {
    pub fn from_nodes(nodes: Vec<T>) -> Self {
        Self {
            nodes,
            links: Vec::new(),
            count: None,
            set: OnceLock::new(),
        }
    }

    /// Decodes a connection object using an explicit node factory.
    pub fn decode_with(
        value: &Value,
        path: &str,
        decode: DecodeFn<T>,
    ) -> Result<Option<Self>, ParseError> {
        if value.is_null() {
            return Ok(None);
        }
        let object = as_object(value, path)?;
        if object.is_empty() {
            return Ok(None);
        }

        let nodes_path = field_path(path, "nodes");
        let raw_nodes = match object.get("nodes") {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Array(raw_nodes)) => raw_nodes,
            Some(_) => return Err(ParseError::invalid_type(path, "nodes", "an array")),
        };

        let nodes = raw_nodes
            .iter()
            .enumerate()
            .map(|(index, raw)| decode(raw, &index_path(&nodes_path, index)))
            .collect::<Result<Vec<_>, _>>()?;

        let links = decode_links(object, path);
        let count = match object.get("count") {
            None | Some(Value::Null) => None,
            Some(raw) => Some(
                raw.as_u64()
                    .ok_or_else(|| ParseError::invalid_type(path, "count", "an unsigned integer"))?,
            ),
        };

        debug!(path = %path, nodes = nodes.len(), "Decoded connection");

        Ok(Some(Self {
            nodes,
            links,
            count,
            set: OnceLock::new(),
        }))
    }

    /// Decodes the connection stored under `key` of `parent`.
    pub fn decode_field_with(
        parent: &Map<String, Value>,
        key: &str,
        path: &str,
        decode: DecodeFn<T>,
    ) -> Result<Option<Self>, ParseError> {
        match parent.get(key) {
            None => Ok(None),
            Some(value) => Self::decode_with(value, &field_path(path, key), decode),
        }
    }

    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn has_nodes(&self) -> bool {
        !self.nodes.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.nodes.first()
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// First link with the given `rel`, e.g. `"next"`.
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links
            .iter()
            .find(|link| link.rel.as_deref() == Some(rel))
    }

    /// Total count reported by the platform, when the query selected it.
    pub fn count(&self) -> Option<u64> {
        self.count
    }
}

impl<T: FromNode> Connection<T> {
    pub fn decode(value: &Value, path: &str) -> Result<Option<Self>, ParseError> {
        Self::decode_with(value, path, T::from_node)
    }

    pub fn decode_field(
        parent: &Map<String, Value>,
        key: &str,
        path: &str,
    ) -> Result<Option<Self>, ParseError> {
        Self::decode_field_with(parent, key, path, T::from_node)
    }
}

impl<T: Eq + Hash> Connection<T> {
    /// Deduplicated view of the nodes, first occurrence wins.
    pub fn as_set(&self) -> NodeSet<'_, T> {
        let members = self.set.get_or_init(|| {
            let mut seen = HashSet::with_capacity(self.nodes.len());
            self.nodes
                .iter()
                .enumerate()
                .filter(|(_, node)| seen.insert(*node))
                .map(|(position, _)| position)
                .collect()
        });
        NodeSet {
            nodes: &self.nodes,
            members,
        }
    }
}

impl<'a, T> IntoIterator for &'a Connection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Connection whose nodes are also indexed by code.
///
/// When two nodes share a code the later one owns the index entry. Ordered
/// iteration still yields both.
#[derive(Debug, Clone)]
pub struct MappedConnection<T> {
    connection: Connection<T>,
    index: HashMap<String, usize>,
}

impl<T: KeyedNode> MappedConnection<T> {
    pub fn from_connection(connection: Connection<T>) -> Self {
        let mut index = HashMap::with_capacity(connection.len());
        for (position, node) in connection.iter().enumerate() {
            index.insert(node.code().to_string(), position);
        }
        Self { connection, index }
    }

    pub fn decode_with(
        value: &Value,
        path: &str,
        decode: DecodeFn<T>,
    ) -> Result<Option<Self>, ParseError> {
        Ok(Connection::decode_with(value, path, decode)?.map(Self::from_connection))
    }

    pub fn decode_field_with(
        parent: &Map<String, Value>,
        key: &str,
        path: &str,
        decode: DecodeFn<T>,
    ) -> Result<Option<Self>, ParseError> {
        Ok(Connection::decode_field_with(parent, key, path, decode)?.map(Self::from_connection))
    }

    /// Node registered under `code`.
    pub fn node(&self, code: &str) -> Option<&T> {
        self.index
            .get(code)
            .and_then(|position| self.connection.nodes.get(*position))
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Number of distinct codes.
    pub fn code_count(&self) -> usize {
        self.index.len()
    }
}

impl<T: KeyedNode + FromNode> MappedConnection<T> {
    pub fn decode(value: &Value, path: &str) -> Result<Option<Self>, ParseError> {
        Self::decode_with(value, path, T::from_node)
    }

    pub fn decode_field(
        parent: &Map<String, Value>,
        key: &str,
        path: &str,
    ) -> Result<Option<Self>, ParseError> {
        Self::decode_field_with(parent, key, path, T::from_node)
    }
}

impl<T> Deref for MappedConnection<T> {
    type Target = Connection<T>;

    fn deref(&self) -> &Self::Target {
        &self.connection
    }
}

/// Read-only, deduplicated view over the nodes of a connection.
#[derive(Debug)]
pub struct NodeSet<'a, T> {
    nodes: &'a [T],
    members: &'a [usize],
}

impl<T> Clone for NodeSet<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeSet<'_, T> {}

impl<'a, T> NodeSet<'a, T> {
    pub fn empty() -> Self {
        Self {
            nodes: &[],
            members: &[],
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
        let (nodes, members) = (self.nodes, self.members);
        members.iter().map(move |position| &nodes[*position])
    }
}

impl<T: PartialEq> NodeSet<'_, T> {
    pub fn contains(&self, node: &T) -> bool {
        self.iter().any(|member| member == node)
    }
}

impl<T: Clone> NodeSet<'_, T> {
    /// Owned copy of the members in view order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<'a, T: KeyedNode> NodeSet<'a, T> {
    pub fn codes(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().map(KeyedNode::code)
    }
}

impl<'a, T> IntoIterator for NodeSet<'a, T> {
    type Item = &'a T;
    type IntoIter = NodeSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        NodeSetIter {
            nodes: self.nodes,
            members: self.members.iter(),
        }
    }
}

pub struct NodeSetIter<'a, T> {
    nodes: &'a [T],
    members: std::slice::Iter<'a, usize>,
}

impl<'a, T> Iterator for NodeSetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.members
            .next()
            .map(|position| &self.nodes[*position])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.members.size_hint()
    }
}

/// Set view of an optional connection; absent connections yield an empty set.
pub fn set_of<T: Eq + Hash>(connection: Option<&Connection<T>>) -> NodeSet<'_, T> {
    connection.map_or_else(NodeSet::empty, Connection::as_set)
}

fn decode_links(object: &Map<String, Value>, path: &str) -> Vec<Link> {
    let raw_links = match object.get("links") {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(raw_links)) => raw_links,
        Some(_) => {
            warn!(path = %path, "Ignoring connection links that are not an array");
            return Vec::new();
        }
    };

    let links_path = field_path(path, "links");
    raw_links
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            let href = raw.get("href").and_then(Value::as_str);
            let Some(href) = href.filter(|href| !href.trim().is_empty()) else {
                warn!(path = %index_path(&links_path, index), "Skipping connection link without href");
                return None;
            };
            let rel = raw
                .pointer("/params/rel")
                .and_then(Value::as_str)
                .map(str::to_string);
            Some(Link {
                rel,
                href: href.to_string(),
            })
        })
        .collect()
}
