// SPDX-License-Identifier: GPL-3.0-only
//! Discovery queries
//!
//! [`Queries`] is the argument shape accepted by
//! [`DisplayManager`](super::DisplayManager): nothing, one query, or many.
//! It is flattened into a `Vec` as soon as it crosses the API boundary.
//!
//! [`DisplayQuery`] is the query language of the bundled DDC/CI transport.

use serde::{Deserialize, Serialize};

use super::record::DisplayRecord;

/// Zero, one or many discovery queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Queries<Q> {
    None,
    One(Q),
    Many(Vec<Q>),
}

impl<Q> Queries<Q> {
    pub fn into_vec(self) -> Vec<Q> {
        match self {
            Queries::None => Vec::new(),
            Queries::One(query) => vec![query],
            Queries::Many(queries) => queries,
        }
    }
}

impl<Q> Default for Queries<Q> {
    fn default() -> Self {
        Queries::None
    }
}

impl<Q> From<Option<Q>> for Queries<Q> {
    fn from(query: Option<Q>) -> Self {
        match query {
            Some(query) => Queries::One(query),
            None => Queries::None,
        }
    }
}

impl<Q> From<Vec<Q>> for Queries<Q> {
    fn from(queries: Vec<Q>) -> Self {
        Queries::Many(queries)
    }
}

impl<Q, const N: usize> From<[Q; N]> for Queries<Q> {
    fn from(queries: [Q; N]) -> Self {
        Queries::Many(queries.into())
    }
}

/// Display filter understood by [`DdcCiTransport`](crate::protocols::ddc_ci::DdcCiTransport)
///
/// Mirrors `ddc_hi::Query`, but matches against a [`DisplayRecord`] so it
/// can be evaluated without touching the bus again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayQuery {
    Any,
    Backend(String),
    DisplayId(String),
    ManufacturerId(String),
    ModelName(String),
    SerialNumber(String),
    And(Vec<DisplayQuery>),
    Or(Vec<DisplayQuery>),
}

impl DisplayQuery {
    pub fn matches(&self, record: &DisplayRecord) -> bool {
        match self {
            DisplayQuery::Any => true,
            DisplayQuery::Backend(backend) => record.backend == *backend,
            DisplayQuery::DisplayId(id) => record.display_id == *id,
            DisplayQuery::ManufacturerId(id) => record.manufacturer_id.as_deref() == Some(id.as_str()),
            DisplayQuery::ModelName(name) => record.model_name.as_deref() == Some(name.as_str()),
            DisplayQuery::SerialNumber(serial) => {
                record.serial_number.as_deref() == Some(serial.as_str())
            }
            DisplayQuery::And(queries) => queries.iter().all(|q| q.matches(record)),
            DisplayQuery::Or(queries) => queries.iter().any(|q| q.matches(record)),
        }
    }

    /// Whether `record` is selected by a query sequence
    ///
    /// A sequence selects the union of its queries; an empty one selects
    /// everything.
    pub fn select(queries: &[DisplayQuery], record: &DisplayRecord) -> bool {
        queries.is_empty() || queries.iter().any(|q| q.matches(record))
    }
}
