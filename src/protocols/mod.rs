// SPDX-License-Identifier: GPL-3.0-only
//! Display control transports
//!
//! A transport performs the actual bus-level work: enumerating monitors and
//! exchanging DDC/CI messages with them. The object model in
//! [`crate::monitor`] only ever talks to hardware through [`Transport`].

pub mod ddc_ci;

#[cfg(test)]
pub(crate) mod recording;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::features::FeatureCode;
use crate::monitor::DisplayRecord;

/// Current and maximum value of a continuous VCP feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VcpValue {
    pub current: u16,
    pub maximum: u16,
}

impl VcpValue {
    pub fn new(current: u16, maximum: u16) -> Self {
        Self { current, maximum }
    }
}

/// Capabilities the display object model needs from a platform backend
///
/// Displays are addressed by the index the transport assigned them during
/// discovery. Every call is a complete, blocking request/reply exchange.
///
/// # Concurrency
///
/// The object model adds no locking and gives no ordering guarantee for
/// concurrent calls on the same index. An implementation that can be shared
/// between threads must serialize bus transactions itself, and owns any
/// timeout, retry or cancellation policy.
pub trait Transport {
    /// Discovery query understood by this transport
    type Query;

    /// Resolve `queries` into display records
    ///
    /// An empty slice selects every display the transport can see.
    fn list(&self, queries: &[Self::Query]) -> Result<Vec<DisplayRecord>>;

    /// Fetch the record of the display at `index`
    fn get_by_index(&self, index: usize) -> Result<DisplayRecord>;

    /// Read a continuous VCP feature
    fn get_vcp_feature(&self, index: usize, code: FeatureCode) -> Result<VcpValue>;

    /// Write a continuous VCP feature
    fn set_vcp_feature(&self, index: usize, code: FeatureCode, value: u16) -> Result<()>;

    /// Write one fragment of a table VCP feature at `offset`
    fn set_table_vcp_feature(
        &self,
        index: usize,
        code: FeatureCode,
        data: &[u8],
        offset: u16,
    ) -> Result<()>;
}
