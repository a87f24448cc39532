// SPDX-License-Identifier: GPL-3.0-only
//! Display discovery
//!
//! A [`DisplayManager`] is a list of discovery queries bound to a
//! transport. It caches nothing: every [`collect`](DisplayManager::collect)
//! asks the transport again, so two calls may see different hardware.
//!
//! # Usage
//!
//! ```no_run
//! use ddc_vcp_control::features::ImageAdjustment;
//! use ddc_vcp_control::monitor::{DisplayManager, DisplayQuery, Queries};
//! use ddc_vcp_control::protocols::ddc_ci::DdcCiTransport;
//!
//! # fn example() -> ddc_vcp_control::Result<()> {
//! let transport = DdcCiTransport::default();
//! let mut manager = DisplayManager::with_queries(
//!     &transport,
//!     Queries::One(DisplayQuery::Backend("i2c-dev".into())),
//! );
//! manager.add_queries(Some(DisplayQuery::ManufacturerId("DEL".into())));
//!
//! for display in manager.collect()? {
//!     let luminance = display.get_feature(ImageAdjustment::Luminance.code())?;
//!     println!("{}: {}/{}", display.display_id(), luminance.current, luminance.maximum);
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::protocols::Transport;

use super::display::Display;
use super::query::Queries;

/// Discovery queries bound to a transport
pub struct DisplayManager<'t, T: Transport> {
    transport: &'t T,
    queries: Vec<T::Query>,
}

impl<'t, T: Transport> DisplayManager<'t, T> {
    /// Manager selecting every display
    pub fn new(transport: &'t T) -> Self {
        Self {
            transport,
            queries: Vec::new(),
        }
    }

    pub fn with_queries(transport: &'t T, queries: impl Into<Queries<T::Query>>) -> Self {
        Self {
            transport,
            queries: queries.into().into_vec(),
        }
    }

    pub fn queries(&self) -> &[T::Query] {
        &self.queries
    }

    /// Replace the whole query sequence
    pub fn set_queries(&mut self, queries: impl Into<Queries<T::Query>>) {
        self.queries = queries.into().into_vec();
    }

    /// Append queries to the existing sequence
    pub fn add_queries(&mut self, queries: impl Into<Queries<T::Query>>) -> &mut Self {
        self.queries.extend(queries.into().into_vec());
        self
    }

    /// Resolve the current queries into displays
    ///
    /// An empty query sequence is still sent to the transport, which
    /// treats it as "every display". Order is whatever the transport
    /// enumerates.
    pub fn collect(&self) -> Result<Vec<Display<'t, T>>> {
        let records = self.transport.list(&self.queries)?;
        debug!(
            "{} display(s) matched {} quer(y/ies)",
            records.len(),
            self.queries.len()
        );

        Ok(records
            .into_iter()
            .map(|record| Display::from_record(self.transport, record))
            .collect())
    }

    /// Alias of [`collect`](Self::collect)
    pub fn list(&self) -> Result<Vec<Display<'t, T>>> {
        self.collect()
    }

    /// Look up a single display by index, ignoring any queries
    pub fn get_by_index(transport: &'t T, index: usize) -> Result<Display<'t, T>> {
        Display::from_index(transport, index)
    }
}

impl<T: Transport> Clone for DisplayManager<'_, T>
where
    T::Query: Clone,
{
    fn clone(&self) -> Self {
        Self {
            transport: self.transport,
            queries: self.queries.clone(),
        }
    }
}

impl<T: Transport> std::fmt::Debug for DisplayManager<'_, T>
where
    T::Query: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayManager")
            .field("queries", &self.queries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::monitor::DisplayRecord;
    use crate::protocols::VcpValue;
    use crate::protocols::recording::{BusQuery, Call, RecordingTransport};

    fn bus(bus_id: u32) -> BusQuery {
        BusQuery { bus_id }
    }

    fn transport() -> RecordingTransport {
        RecordingTransport::new()
            .with_display(1, DisplayRecord::new(0, "i2c-dev", "i2c-1"))
            .with_display(2, DisplayRecord::new(1, "i2c-dev", "i2c-2"))
            .with_display(5, DisplayRecord::new(2, "winapi", "MONITOR\\DEL41A3"))
            .with_value(1, 0x10, VcpValue::new(30, 100))
    }

    #[test]
    fn test_empty_manager_still_lists() {
        let transport = transport();
        let manager = DisplayManager::new(&transport);

        let displays = manager.collect().unwrap();
        assert_eq!(displays.len(), 3);
        assert_eq!(transport.calls(), vec![Call::List(vec![])]);
    }

    #[test]
    fn test_collect_mirrors_records() {
        let transport = transport();
        let manager = DisplayManager::new(&transport);

        let expected = transport.list(&[]).unwrap();
        let displays = manager.collect().unwrap();
        assert_eq!(displays.len(), expected.len());
        for (display, record) in displays.iter().zip(&expected) {
            assert_eq!(display.index(), record.index);
            assert_eq!(display.backend(), record.backend);
            assert_eq!(display.display_id(), record.display_id);
        }
    }

    #[test]
    fn test_add_queries_chain() {
        let transport = transport();
        let displays = DisplayManager::with_queries(&transport, vec![bus(1)])
            .add_queries(Queries::One(bus(2)))
            .collect()
            .unwrap();

        assert_eq!(transport.calls(), vec![Call::List(vec![bus(1), bus(2)])]);
        let ids: Vec<&str> = displays.iter().map(|d| d.display_id()).collect();
        assert_eq!(ids, vec!["i2c-1", "i2c-2"]);
    }

    #[test]
    fn test_add_queries_associative() {
        let transport = transport();

        let mut built = DisplayManager::with_queries(&transport, vec![bus(1), bus(2)]);
        built.add_queries(Some(bus(3)));
        let direct = DisplayManager::with_queries(&transport, [bus(1), bus(2), bus(3)]);

        assert_eq!(built.queries(), direct.queries());
    }

    #[test]
    fn test_add_nothing_is_noop() {
        let transport = transport();
        let mut manager = DisplayManager::with_queries(&transport, Queries::One(bus(1)));

        manager.add_queries(None::<BusQuery>);
        manager.add_queries(Queries::None);
        manager.add_queries(Vec::<BusQuery>::new());
        assert_eq!(manager.queries(), &[bus(1)]);
    }

    #[test]
    fn test_set_queries_replaces() {
        let transport = transport();
        let mut manager = DisplayManager::with_queries(&transport, vec![bus(1), bus(2)]);

        manager.set_queries(Some(bus(5)));
        assert_eq!(manager.queries(), &[bus(5)]);
        assert_eq!(manager.list().unwrap()[0].backend(), "winapi");

        manager.set_queries(Queries::None);
        assert!(manager.queries().is_empty());
    }

    #[test]
    fn test_get_by_index_then_get_feature() {
        let transport = transport();
        let display = DisplayManager::get_by_index(&transport, 1).unwrap();
        transport.clear_calls();

        let value = display.get_feature(0x10).unwrap();
        assert_eq!(value, VcpValue::new(30, 100));
        assert_eq!(transport.calls(), vec![Call::GetVcp(1, 0x10)]);
    }

    #[test]
    fn test_get_by_index_missing() {
        let transport = transport();
        let err = DisplayManager::get_by_index(&transport, 9).unwrap_err();
        assert!(matches!(err, Error::DisplayNotFound(9)));
    }

    #[test]
    fn test_discovery_failure_keeps_manager_usable() {
        let transport = transport();
        let manager = DisplayManager::with_queries(&transport, Queries::One(bus(2)));

        transport.fail_next_list();
        let err = manager.collect().unwrap_err();
        assert!(matches!(err, Error::Discovery { .. }));

        let displays = manager.collect().unwrap();
        assert_eq!(displays.len(), 1);
        assert_eq!(manager.queries(), &[bus(2)]);
    }

    #[test]
    fn test_collect_is_fresh_each_time() {
        let transport = transport();
        let manager = DisplayManager::new(&transport);

        manager.collect().unwrap();
        manager.collect().unwrap();
        assert_eq!(transport.calls().len(), 2);
    }
}
