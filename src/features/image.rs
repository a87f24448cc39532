// SPDX-License-Identifier: GPL-3.0-only
//! Image adjustment controls

vcp_features! {
    /// Luminance, contrast, color gains, LUTs and windowing
    pub enum ImageAdjustment {
        SixAxisHueControlBlue = 0x9F,
        SixAxisHueControlCyan = 0x9E,
        SixAxisHueControlGreen = 0x9D,
        SixAxisHueControlMagenta = 0xA0,
        SixAxisHueControlRed = 0x9B,
        SixAxisHueControlYellow = 0x9C,
        SixAxisSaturationControlBlue = 0x5D,
        SixAxisSaturationControlCyan = 0x5C,
        SixAxisSaturationControlGreen = 0x5B,
        SixAxisSaturationControlMagenta = 0x5E,
        SixAxisSaturationControlRed = 0x59,
        SixAxisSaturationControlYellow = 0x5A,
        AdjustZoom = 0x7C,
        AutoColorSetup = 0x1F,
        AutoSetup = 0x1E,
        AutoSetupOnOff = 0xA2,
        BacklightControl = 0x13,
        BacklightLevelBlue = 0x71,
        BacklightLevelGreen = 0x6F,
        BacklightLevelRed = 0x6D,
        BacklightLevelWhite = 0x6B,
        /// Table feature, written in fragments by offset
        BlockLutOperation = 0x75,
        Clock = 0x0E,
        ClockPhase = 0x3E,
        ColorSaturation = 0x8A,
        ColorTemperatureIncrement = 0x0B,
        ColorTemperatureRequest = 0x0C,
        Contrast = 0x12,
        DisplayApplication = 0xDC,
        FleshToneEnhancement = 0x11,
        Focus = 0x1C,
        Gamma = 0x72,
        GrayScaleExpansion = 0x2E,
        HorizontalMoire = 0x56,
        Hue = 0x90,
        /// Backlight or black-level luminance, usually shown as "brightness"
        Luminance = 0x10,
        LutSize = 0x73,
        ScreenOrientation = 0xAA,
        /// Color temperature preset (sRGB, 6500K, user 1, ...)
        SelectColorPreset = 0x14,
        Sharpness = 0x87,
        /// Table feature, written in fragments by offset
        SinglePointLutOperation = 0x74,
        StereoVideoMode = 0xD4,
        TvBlackLevelLuminance = 0x92,
        TvContrast = 0x8E,
        TvSharpness = 0x8C,
        UserColorVisionCompensation = 0x17,
        VelocityScanModulation = 0x88,
        VerticalMoire = 0x58,
        VideoBlackLevelBlue = 0x70,
        VideoBlackLevelGreen = 0x6E,
        VideoBlackLevelRed = 0x6C,
        VideoGainBlue = 0x1A,
        VideoGainGreen = 0x18,
        VideoGainRed = 0x16,
        WindowBackground = 0x9A,
        WindowControlOnOff = 0xA4,
        WindowSelect = 0xA5,
        WindowSize = 0xA6,
        WindowTransparency = 0xA7,
    }
}
