// SPDX-License-Identifier: GPL-3.0-only
//! Raw display records produced by transports

use serde::{Deserialize, Serialize};

/// `major.minor` protocol version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
}

impl Version {
    pub fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Everything a transport knows about one display at discovery time
///
/// Only `index`, `backend` and `display_id` are guaranteed. The rest is
/// `None` when the transport could not read it, and is left out of the
/// serialized form in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    /// Transport-assigned handle used for every VCP call
    pub index: usize,
    /// Platform mechanism that produced the display (e.g. "i2c-dev")
    pub backend: String,
    pub display_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edid_data: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mccs_version: Option<Version>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_id: Option<String>,
    /// Raw EDID year byte (years since 1990)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacture_year: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacture_week: Option<u8>,
}

impl DisplayRecord {
    /// Record carrying only the required identity fields
    pub fn new(index: usize, backend: impl Into<String>, display_id: impl Into<String>) -> Self {
        Self {
            index,
            backend: backend.into(),
            display_id: display_id.into(),
            edid_data: None,
            version: None,
            mccs_version: None,
            serial: None,
            serial_number: None,
            model_id: None,
            model_name: None,
            manufacturer_id: None,
            manufacture_year: None,
            manufacture_week: None,
        }
    }
}
