// SPDX-License-Identifier: GPL-3.0-only
//! Display entity
//!
//! A [`Display`] is an index into its transport plus the metadata the
//! transport reported at discovery time. It holds no connection, so it can
//! be cloned, dropped and recreated freely.

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::features::{FeatureCode, ImageAdjustment};
use crate::protocols::{Transport, VcpValue};

use super::record::{DisplayRecord, Version};

/// Largest payload of a single DDC/CI table write fragment
pub const MAX_TABLE_FRAGMENT: usize = 32;

/// One monitor known to a transport
pub struct Display<'t, T: Transport> {
    transport: &'t T,
    record: DisplayRecord,
}

impl<'t, T: Transport> Display<'t, T> {
    /// Wrap a record produced by `transport`
    pub fn from_record(transport: &'t T, record: DisplayRecord) -> Self {
        Self { transport, record }
    }

    /// Resolve the display at `index` through the transport
    pub fn from_index(transport: &'t T, index: usize) -> Result<Self> {
        let record = transport.get_by_index(index)?;
        Ok(Self::from_record(transport, record))
    }

    pub fn index(&self) -> usize {
        self.record.index
    }

    pub fn backend(&self) -> &str {
        &self.record.backend
    }

    pub fn display_id(&self) -> &str {
        &self.record.display_id
    }

    pub fn edid_data(&self) -> Option<&[u8]> {
        self.record.edid_data.as_deref()
    }

    pub fn version(&self) -> Option<Version> {
        self.record.version
    }

    pub fn mccs_version(&self) -> Option<Version> {
        self.record.mccs_version
    }

    pub fn serial(&self) -> Option<u32> {
        self.record.serial
    }

    pub fn serial_number(&self) -> Option<&str> {
        self.record.serial_number.as_deref()
    }

    pub fn model_id(&self) -> Option<u16> {
        self.record.model_id
    }

    pub fn model_name(&self) -> Option<&str> {
        self.record.model_name.as_deref()
    }

    pub fn manufacturer_id(&self) -> Option<&str> {
        self.record.manufacturer_id.as_deref()
    }

    pub fn manufacture_year(&self) -> Option<u8> {
        self.record.manufacture_year
    }

    pub fn manufacture_week(&self) -> Option<u8> {
        self.record.manufacture_week
    }

    pub fn record(&self) -> &DisplayRecord {
        &self.record
    }

    pub fn into_record(self) -> DisplayRecord {
        self.record
    }

    /// Read the current and maximum value of a continuous feature
    ///
    /// The code is passed through as-is; whether it names a continuous
    /// feature is for the monitor to decide.
    pub fn get_feature(&self, code: FeatureCode) -> Result<VcpValue> {
        debug!("get VCP {:#04x} on display {}", code, self.index());
        self.transport.get_vcp_feature(self.index(), code)
    }

    /// Set a continuous feature
    ///
    /// Continuous values are 16 bits on the wire. Anything larger, or
    /// negative, is rejected with [`Error::Validation`] without talking to
    /// the monitor.
    pub fn set_feature<V>(&self, code: FeatureCode, value: V) -> Result<()>
    where
        V: TryInto<u16> + Copy + std::fmt::Display,
    {
        let value: u16 = value.try_into().map_err(|_| {
            Error::Validation(format!(
                "value {} for VCP {:#04x} does not fit in 16 bits",
                value, code
            ))
        })?;

        debug!("set VCP {:#04x} = {} on display {}", code, value, self.index());
        self.transport.set_vcp_feature(self.index(), code, value)
    }

    /// Write one fragment of a table feature at `offset`
    ///
    /// Multi-fragment transfers are issued by the caller with increasing
    /// offsets. A fragment longer than [`MAX_TABLE_FRAGMENT`] bytes, or one
    /// reaching past the 16-bit offset space, is rejected before any bus
    /// traffic.
    pub fn set_table_feature(
        &self,
        code: FeatureCode,
        data: &[u8],
        offset: u16,
    ) -> Result<()> {
        if data.len() > MAX_TABLE_FRAGMENT {
            return Err(Error::Validation(format!(
                "table fragment for VCP {:#04x} is {} bytes, limit is {}",
                code,
                data.len(),
                MAX_TABLE_FRAGMENT
            )));
        }
        if offset as usize + data.len() > u16::MAX as usize + 1 {
            return Err(Error::Validation(format!(
                "table fragment for VCP {:#04x} at offset {} overruns the table",
                code, offset
            )));
        }

        debug!(
            "write {} table bytes to VCP {:#04x} at offset {} on display {}",
            data.len(),
            code,
            offset,
            self.index()
        );
        self.transport
            .set_table_vcp_feature(self.index(), code, data, offset)
    }

    /// Read the luminance ("brightness") control
    pub fn get_brightness(&self) -> Result<VcpValue> {
        self.get_feature(ImageAdjustment::Luminance.code())
    }

    /// Set the luminance ("brightness") control
    pub fn set_brightness(&self, value: u16) -> Result<()> {
        self.set_feature(ImageAdjustment::Luminance.code(), value)
    }
}

impl<T: Transport> Clone for Display<'_, T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport,
            record: self.record.clone(),
        }
    }
}

impl<T: Transport> std::fmt::Debug for Display<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Display(index: {}, backend: {}, id: {}, model: {})",
            self.index(),
            self.backend(),
            self.display_id(),
            self.model_name().unwrap_or("?")
        )
    }
}

impl<T: Transport> Serialize for Display<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.record.serialize(serializer)
    }
}
