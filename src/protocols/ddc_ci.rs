// SPDX-License-Identifier: GPL-3.0-only
//! DDC/CI (Display Data Channel Command Interface) transport
//!
//! DDC/CI is a standard protocol for controlling monitors over the I2C bus
//! of the video cable. Bus access, checksums and inter-message timing are
//! handled by `ddc-hi`; this module maps its displays onto indexed
//! [`DisplayRecord`]s.
//!
//! The index of a display is its position in `ddc_hi::Display::enumerate()`.
//! Each call enumerates again and holds no handle afterwards, the same way
//! the record-based object model treats displays. A VCP call reads the
//! capability string of its target display only. Listing reads every
//! display's capabilities, and a display that fails is still listed with
//! its EDID metadata.

use std::sync::{Mutex, PoisonError};

use ddc_hi::{Ddc, DdcHost, DdcTable, Display};

use super::{Transport, VcpValue};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::features::FeatureCode;
use crate::monitor::{DisplayQuery, DisplayRecord, Version};

/// Transport over the platform DDC/CI backends supported by `ddc-hi`
pub struct DdcCiTransport {
    update_capabilities: bool,
    sleep_after_command: bool,
    /// Serializes bus transactions issued through this transport
    bus: Mutex<()>,
}

impl DdcCiTransport {
    pub fn new(config: &Config) -> Self {
        Self {
            update_capabilities: config.update_capabilities,
            sleep_after_command: config.sleep_after_command,
            bus: Mutex::new(()),
        }
    }

    /// Read the capability string of one display, if configured
    fn load_capabilities(&self, display: &mut Display) -> Result<()> {
        if !self.update_capabilities {
            return Ok(());
        }

        display.update_capabilities().map_err(|err| {
            let err = anyhow::Error::from(err);
            let display_id = &display.info.id;
            warn!(
                display_id = %display_id,
                error = ?err,
                "Failed to read DDC/CI capabilities"
            );
            Error::Discovery {
                reason: format!("capabilities of {}: {}", display_id, err),
            }
        })
    }

    /// Open the display at `index`; no other display is asked for capabilities
    fn open(&self, index: usize) -> Result<Display> {
        let displays = Display::enumerate();
        debug!("Found {} DDC/CI display(s)", displays.len());
        nth_loaded(displays, index, |display| self.load_capabilities(display))
    }

    /// Run one VCP exchange against the display at `index`
    fn exchange<R>(
        &self,
        index: usize,
        code: FeatureCode,
        command: impl FnOnce(&mut Display) -> anyhow::Result<R>,
    ) -> Result<R> {
        let _bus = self.bus.lock().unwrap_or_else(PoisonError::into_inner);
        let mut display = self.open(index)?;

        // capability strings list every feature the monitor implements
        if self.update_capabilities && display.info.mccs_database.get(code).is_none() {
            let display_id = &display.info.id;
            debug!(
                "Display {} ({}) does not list VCP {:#04x}",
                index, display_id, code
            );
            return Err(Error::UnsupportedFeature { index, code });
        }

        let result = command(&mut display).map_err(|source| Error::Communication { index, source });
        if self.sleep_after_command {
            display.handle.sleep();
        }
        result
    }
}

impl Default for DdcCiTransport {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl std::fmt::Debug for DdcCiTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DdcCiTransport(capabilities: {}, sleep: {})",
            self.update_capabilities, self.sleep_after_command
        )
    }
}

/// Take the display at `index` and run `load` on it alone
fn nth_loaded<D>(
    displays: impl IntoIterator<Item = D>,
    index: usize,
    load: impl FnOnce(&mut D) -> Result<()>,
) -> Result<D> {
    let mut display = displays
        .into_iter()
        .nth(index)
        .ok_or(Error::DisplayNotFound(index))?;
    load(&mut display)?;
    Ok(display)
}

/// Run `load` on every display. A display that fails keeps the metadata
/// enumeration gave it and stays in the list.
fn load_each<D>(displays: &mut [D], mut load: impl FnMut(&mut D) -> Result<()>) {
    for (index, display) in displays.iter_mut().enumerate() {
        if let Err(err) = load(display) {
            warn!(index, error = %err, "Listing display without capabilities");
        }
    }
}

fn record(index: usize, display: &Display) -> DisplayRecord {
    let info = &display.info;
    DisplayRecord {
        index,
        backend: info.backend.to_string(),
        display_id: info.id.clone(),
        edid_data: info.edid_data.clone(),
        version: info.version.map(|(major, minor)| Version::new(major, minor)),
        mccs_version: info.mccs_version.as_ref().map(|v| Version::new(v.major, v.minor)),
        serial: info.serial,
        serial_number: info.serial_number.clone(),
        model_id: info.model_id,
        model_name: info.model_name.clone(),
        manufacturer_id: info.manufacturer_id.clone(),
        manufacture_year: info.manufacture_year,
        manufacture_week: info.manufacture_week,
    }
}

impl Transport for DdcCiTransport {
    type Query = DisplayQuery;

    fn list(&self, queries: &[DisplayQuery]) -> Result<Vec<DisplayRecord>> {
        let _bus = self.bus.lock().unwrap_or_else(PoisonError::into_inner);
        let mut displays = Display::enumerate();
        debug!("Found {} DDC/CI display(s)", displays.len());
        load_each(&mut displays, |display| self.load_capabilities(display));

        let records: Vec<DisplayRecord> = displays
            .iter()
            .enumerate()
            .map(|(index, display)| record(index, display))
            .filter(|record| DisplayQuery::select(queries, record))
            .collect();

        info!(
            "{} DDC/CI display(s) matched {} quer(y/ies)",
            records.len(),
            queries.len()
        );
        Ok(records)
    }

    fn get_by_index(&self, index: usize) -> Result<DisplayRecord> {
        let _bus = self.bus.lock().unwrap_or_else(PoisonError::into_inner);
        let display = self.open(index)?;
        Ok(record(index, &display))
    }

    fn get_vcp_feature(&self, index: usize, code: FeatureCode) -> Result<VcpValue> {
        self.exchange(index, code, |display| {
            let value = display.handle.get_vcp_feature(code)?;
            Ok(VcpValue::new(value.value(), value.maximum()))
        })
    }

    fn set_vcp_feature(&self, index: usize, code: FeatureCode, value: u16) -> Result<()> {
        self.exchange(index, code, |display| {
            display.handle.set_vcp_feature(code, value)?;
            Ok(())
        })
    }

    fn set_table_vcp_feature(
        &self,
        index: usize,
        code: FeatureCode,
        data: &[u8],
        offset: u16,
    ) -> Result<()> {
        self.exchange(index, code, |display| {
            display.handle.table_write(code, offset, data)?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_copies_config() {
        let config = Config {
            update_capabilities: false,
            sleep_after_command: true,
            queries: vec![DisplayQuery::Any],
        };
        let transport = DdcCiTransport::new(&config);
        assert!(!transport.update_capabilities);
        assert!(transport.sleep_after_command);
    }

    #[test]
    fn test_default_reads_capabilities() {
        let transport = DdcCiTransport::default();
        assert!(transport.update_capabilities);
        assert_eq!(
            format!("{:?}", transport),
            "DdcCiTransport(capabilities: true, sleep: true)"
        );
    }

    /// Stand-in for a monitor whose capability read may fail
    #[derive(Debug, PartialEq)]
    struct Monitor {
        id: &'static str,
        healthy: bool,
        loaded: bool,
    }

    fn monitors() -> Vec<Monitor> {
        vec![
            Monitor { id: "i2c-3", healthy: false, loaded: false },
            Monitor { id: "i2c-4", healthy: true, loaded: false },
            Monitor { id: "i2c-5", healthy: true, loaded: false },
        ]
    }

    fn load(reads: &mut Vec<&'static str>, monitor: &mut Monitor) -> Result<()> {
        reads.push(monitor.id);
        if !monitor.healthy {
            return Err(Error::Discovery {
                reason: format!("capabilities of {}: no reply", monitor.id),
            });
        }
        monitor.loaded = true;
        Ok(())
    }

    #[test]
    fn test_open_reads_only_target_capabilities() {
        let mut reads = Vec::new();
        let monitor = nth_loaded(monitors(), 1, |m| load(&mut reads, m)).unwrap();

        assert_eq!(monitor.id, "i2c-4");
        assert!(monitor.loaded);
        assert_eq!(reads, vec!["i2c-4"]);
    }

    #[test]
    fn test_open_unresponsive_target_fails() {
        let mut reads = Vec::new();
        let err = nth_loaded(monitors(), 0, |m| load(&mut reads, m)).unwrap_err();
        assert!(matches!(err, Error::Discovery { ref reason } if reason.contains("i2c-3")));
    }

    #[test]
    fn test_open_missing_index_reads_nothing() {
        let mut reads = Vec::new();
        let err = nth_loaded(monitors(), 7, |m| load(&mut reads, m)).unwrap_err();
        assert!(matches!(err, Error::DisplayNotFound(7)));
        assert!(reads.is_empty());
    }

    #[test]
    fn test_list_keeps_unresponsive_display() {
        let mut reads = Vec::new();
        let mut displays = monitors();
        load_each(&mut displays, |m| load(&mut reads, m));

        assert_eq!(displays.len(), 3);
        assert_eq!(reads, vec!["i2c-3", "i2c-4", "i2c-5"]);
        let loaded: Vec<bool> = displays.iter().map(|m| m.loaded).collect();
        assert_eq!(loaded, vec![false, true, true]);
    }
}
