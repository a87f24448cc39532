//! In-memory transport that records every call, for tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::features::FeatureCode;
use crate::monitor::DisplayRecord;

use super::{Transport, VcpValue};

/// Selects the display attached to an I2C bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BusQuery {
    pub bus_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    List(Vec<BusQuery>),
    GetByIndex(usize),
    GetVcp(usize, FeatureCode),
    SetVcp(usize, FeatureCode, u16),
    SetTable(usize, FeatureCode, Vec<u8>, u16),
}

/// Fake monitors keyed by bus id. A VCP code is supported by a display
/// only once a value was registered for it with [`Self::with_value`].
#[derive(Default)]
pub(crate) struct RecordingTransport {
    displays: Vec<(u32, DisplayRecord)>,
    values: RefCell<HashMap<(usize, FeatureCode), VcpValue>>,
    calls: RefCell<Vec<Call>>,
    fail_next_list: Cell<bool>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display(mut self, bus_id: u32, record: DisplayRecord) -> Self {
        self.displays.push((bus_id, record));
        self
    }

    pub fn with_value(self, index: usize, code: FeatureCode, value: VcpValue) -> Self {
        self.values.borrow_mut().insert((index, code), value);
        self
    }

    pub fn fail_next_list(&self) {
        self.fail_next_list.set(true);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn find(&self, index: usize) -> Result<&DisplayRecord> {
        self.displays
            .iter()
            .map(|(_, record)| record)
            .find(|record| record.index == index)
            .ok_or(Error::DisplayNotFound(index))
    }
}

impl Transport for RecordingTransport {
    type Query = BusQuery;

    fn list(&self, queries: &[BusQuery]) -> Result<Vec<DisplayRecord>> {
        self.record(Call::List(queries.to_vec()));
        if self.fail_next_list.replace(false) {
            return Err(Error::Discovery {
                reason: "bus scan failed".to_string(),
            });
        }

        Ok(self
            .displays
            .iter()
            .filter(|(bus_id, _)| queries.is_empty() || queries.iter().any(|q| q.bus_id == *bus_id))
            .map(|(_, record)| record.clone())
            .collect())
    }

    fn get_by_index(&self, index: usize) -> Result<DisplayRecord> {
        self.record(Call::GetByIndex(index));
        self.find(index).cloned()
    }

    fn get_vcp_feature(&self, index: usize, code: FeatureCode) -> Result<VcpValue> {
        self.record(Call::GetVcp(index, code));
        self.find(index)?;
        self.values
            .borrow()
            .get(&(index, code))
            .copied()
            .ok_or(Error::UnsupportedFeature { index, code })
    }

    fn set_vcp_feature(&self, index: usize, code: FeatureCode, value: u16) -> Result<()> {
        self.record(Call::SetVcp(index, code, value));
        self.find(index)?;
        let mut values = self.values.borrow_mut();
        let entry = values
            .get_mut(&(index, code))
            .ok_or(Error::UnsupportedFeature { index, code })?;
        // monitors clamp to their reported maximum
        entry.current = value.min(entry.maximum);
        Ok(())
    }

    fn set_table_vcp_feature(
        &self,
        index: usize,
        code: FeatureCode,
        data: &[u8],
        offset: u16,
    ) -> Result<()> {
        self.record(Call::SetTable(index, code, data.to_vec(), offset));
        self.find(index).map(|_| ())
    }
}
