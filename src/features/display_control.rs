// SPDX-License-Identifier: GPL-3.0-only
//! Display control features

vcp_features! {
    /// Identification, power and OSD controls
    pub enum DisplayControl {
        DisplayControllerId = 0xC8,
        DisplayFirmwareLevel = 0xC9,
        /// Shares 0xC6 with `Miscellaneous::ApplicationEnableKey`
        DisplayUsageTime = 0xC6,
        HorizontalFrequency = 0xAC,
        ImageMode = 0xDB,
        OsdButtonLevelControl = 0xCA,
        OsdLanguage = 0xCC,
        /// DPM/DPMS power state (on, standby, suspend, off)
        PowerMode = 0xD6,
        SourceColorCoding = 0xB5,
        SourceTimingMode = 0xB4,
        /// MCCS version implemented by the monitor
        Version = 0xDF,
        VerticalFrequency = 0xAE,
    }
}
