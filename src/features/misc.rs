// SPDX-License-Identifier: GPL-3.0-only
//! Miscellaneous functions

vcp_features! {
    /// Input selection, descriptors and auxiliary outputs
    pub enum Miscellaneous {
        ActiveControl = 0x52,
        AmbientLightSensor = 0x66,
        /// Shares 0xC6 with `DisplayControl::DisplayUsageTime`
        ApplicationEnableKey = 0xC6,
        /// Table feature
        AssetTag = 0xD2,
        AuxiliaryDisplayData = 0xCF,
        AuxiliaryDisplaySize = 0xCE,
        AuxiliaryPowerOutput = 0xD7,
        Degauss = 0x01,
        DisplayDescriptorLength = 0xC2,
        DisplayIdentificationDataOperation = 0x87,
        DisplayTechnologyType = 0xB6,
        EnableDisplayOfDisplayDescriptor = 0xC4,
        FlatPanelSubPixelLayout = 0xB2,
        /// Active input (DP-1, HDMI-1, ...) as a non-continuous value
        InputSource = 0x60,
        NewControlValue = 0x02,
        OutputSelect = 0xD0,
        PerformancePreservation = 0x54,
        RemoteProcedureCall = 0x76,
        ScratchPad = 0xDE,
        SoftControls = 0x03,
        StatusIndicators = 0xCD,
        TransmitDisplayDescriptor = 0xC3,
        TvChannelUpDown = 0x8B,
    }
}
