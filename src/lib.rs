// SPDX-License-Identifier: GPL-3.0-only
//! Typed VCP feature access for DDC/CI monitors
//!
//! - [`features`]: MCCS feature codes grouped by category
//! - [`monitor`]: the [`Display`](monitor::Display) entity and
//!   [`DisplayManager`](monitor::DisplayManager) discovery
//! - [`protocols`]: the [`Transport`](protocols::Transport) seam and the
//!   `ddc-hi` implementation of it
//! - [`config`]: transport settings and default queries

#[macro_use]
extern crate tracing;

pub mod config;
pub mod error;
pub mod features;
pub mod monitor;
pub mod protocols;

pub use error::{Error, Result};
