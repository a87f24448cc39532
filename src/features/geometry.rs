// SPDX-License-Identifier: GPL-3.0-only
//! Geometry controls

vcp_features! {
    /// Position, size, convergence and keystone adjustments
    pub enum Geometry {
        BottomCornerFlare = 0x4A,
        BottomCornerHook = 0x4C,
        DisplayScaling = 0x86,
        HorizontalConvergenceMG = 0x29,
        HorizontalConvergenceRB = 0x28,
        HorizontalKeystone = 0x42,
        HorizontalLinearity = 0x2A,
        HorizontalLinearityBalance = 0x2C,
        HorizontalMirror = 0x82,
        HorizontalParallelogram = 0x40,
        HorizontalPincushion = 0x24,
        HorizontalPincushionBalance = 0x26,
        HorizontalPosition = 0x20,
        HorizontalSize = 0x22,
        Rotation = 0x44,
        ScanMode = 0xDA,
        TopCornerFlare = 0x46,
        TopCornerHook = 0x48,
        VerticalConvergenceMG = 0x39,
        VerticalConvergenceRB = 0x38,
        VerticalKeystone = 0x43,
        VerticalLinearity = 0x3A,
        VerticalLinearityBalance = 0x3C,
        VerticalMirror = 0x84,
        VerticalParallelogram = 0x41,
        VerticalPincushion = 0x34,
        VerticalPincushionBalance = 0x36,
        VerticalPosition = 0x30,
        VerticalSize = 0x32,
        WindowPositionBrX = 0x97,
        WindowPositionBrY = 0x98,
        WindowPositionTlX = 0x95,
        WindowPositionTlY = 0x96,
    }
}
