// SPDX-License-Identifier: GPL-3.0-only
//! Preset operations

vcp_features! {
    /// Factory resets and settings persistence
    pub enum PresetOperation {
        CodePage = 0x00,
        RestoreFactoryColorDefaults = 0x08,
        /// Write-only; any non-zero value triggers the reset
        RestoreFactoryDefaults = 0x04,
        RestoreFactoryGeometryDefaults = 0x06,
        RestoreFactoryLuminanceContrastDefaults = 0x05,
        RestoreFactoryTvDefaults = 0x0A,
        SaveRestoreSettings = 0xB0,
    }
}
