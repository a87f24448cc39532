// SPDX-License-Identifier: GPL-3.0-only
//! Error types for display discovery and VCP access
//!
//! Transport failures are relayed to the caller as-is. Input-side problems
//! are reported as [`Error::Validation`] before any bus traffic happens.

use thiserror::Error;

use crate::features::FeatureCode;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    /// No display occupies the requested index
    #[error("Display {0} not found")]
    DisplayNotFound(usize),

    /// Displays could not be enumerated
    #[error("Display discovery failed: {reason}")]
    Discovery { reason: String },

    /// DDC/CI communication error
    #[error("DDC/CI communication error on display {index}: {source}")]
    Communication {
        index: usize,
        #[source]
        source: anyhow::Error,
    },

    /// The monitor does not implement the requested VCP code
    #[error("Display {index} does not support VCP feature {code:#04x}")]
    UnsupportedFeature { index: usize, code: FeatureCode },

    /// Malformed argument, rejected before reaching the transport
    #[error("Invalid argument: {0}")]
    Validation(String),

    /// Feature name missing from the catalog
    #[error("Unknown VCP feature {category}::{name}")]
    UnknownFeature { category: String, name: String },

    /// Category name missing from the catalog
    #[error("Unknown VCP feature category {0}")]
    UnknownCategory(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
