// SPDX-License-Identifier: GPL-3.0-only
//! VCP feature catalog organized by MCCS category
//!
//! Every category is a `#[repr(u8)]` enum whose discriminants are the VESA
//! Monitor Control Command Set codes, so `ImageAdjustment::Luminance as u8`
//! and `ImageAdjustment::Luminance.code()` both give `0x10`.
//!
//! Codes are protocol constants. A few of them appear in more than one
//! category (`0xC6` is both [`DisplayControl::DisplayUsageTime`] and
//! [`Miscellaneous::ApplicationEnableKey`]); both entries are kept.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};

/// One-byte VCP feature code
pub type FeatureCode = u8;

/// Common interface of the per-category feature enums
pub trait Feature: Copy + 'static {
    /// Category the feature is listed under
    const CATEGORY: Category;

    /// Every feature of the category, in catalog order
    const ALL: &'static [Self];

    fn code(self) -> FeatureCode;

    fn name(self) -> &'static str;
}

macro_rules! vcp_features {
    (
        $(#[$meta:meta])*
        pub enum $category:ident {
            $($(#[$fmeta:meta])* $name:ident = $code:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $category {
            $($(#[$fmeta])* $name = $code,)+
        }

        impl $category {
            /// VCP code of this feature
            pub const fn code(self) -> $crate::features::FeatureCode {
                self as $crate::features::FeatureCode
            }

            /// Catalog name of this feature
            pub const fn name(self) -> &'static str {
                match self {
                    $($category::$name => stringify!($name),)+
                }
            }
        }

        impl $crate::features::Feature for $category {
            const CATEGORY: $crate::features::Category = $crate::features::Category::$category;
            const ALL: &'static [Self] = &[$($category::$name,)+];

            fn code(self) -> $crate::features::FeatureCode {
                $category::code(self)
            }

            fn name(self) -> &'static str {
                $category::name(self)
            }
        }

        impl From<$category> for $crate::features::FeatureCode {
            fn from(feature: $category) -> Self {
                feature.code()
            }
        }

        impl std::str::FromStr for $category {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                match s {
                    $(stringify!($name) => Ok($category::$name),)+
                    _ => Err($crate::error::Error::UnknownFeature {
                        category: stringify!($category).to_string(),
                        name: s.to_string(),
                    }),
                }
            }
        }
    };
}

pub mod audio;
pub mod display_control;
pub mod dpvl;
pub mod geometry;
pub mod image;
pub mod misc;
pub mod preset;

pub use audio::Audio;
pub use display_control::DisplayControl;
pub use dpvl::DigitalPacketVideoLink;
pub use geometry::Geometry;
pub use image::ImageAdjustment;
pub use misc::Miscellaneous;
pub use preset::PresetOperation;

/// MCCS functional grouping of VCP features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    PresetOperation,
    ImageAdjustment,
    DisplayControl,
    Geometry,
    Miscellaneous,
    Audio,
    DigitalPacketVideoLink,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::PresetOperation,
        Category::ImageAdjustment,
        Category::DisplayControl,
        Category::Geometry,
        Category::Miscellaneous,
        Category::Audio,
        Category::DigitalPacketVideoLink,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Category::PresetOperation => "PresetOperation",
            Category::ImageAdjustment => "ImageAdjustment",
            Category::DisplayControl => "DisplayControl",
            Category::Geometry => "Geometry",
            Category::Miscellaneous => "Miscellaneous",
            Category::Audio => "Audio",
            Category::DigitalPacketVideoLink => "DigitalPacketVideoLink",
        }
    }

    /// `(name, code)` pairs of the category in catalog order
    pub fn features(self) -> Vec<(&'static str, FeatureCode)> {
        match self {
            Category::PresetOperation => entries::<PresetOperation>(),
            Category::ImageAdjustment => entries::<ImageAdjustment>(),
            Category::DisplayControl => entries::<DisplayControl>(),
            Category::Geometry => entries::<Geometry>(),
            Category::Miscellaneous => entries::<Miscellaneous>(),
            Category::Audio => entries::<Audio>(),
            Category::DigitalPacketVideoLink => entries::<DigitalPacketVideoLink>(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

fn entries<F: Feature>() -> Vec<(&'static str, FeatureCode)> {
    F::ALL.iter().map(|f| (f.name(), f.code())).collect()
}

/// Category name -> feature name -> code, built on first use
static CATALOG: Lazy<HashMap<&'static str, HashMap<&'static str, FeatureCode>>> =
    Lazy::new(|| {
        Category::ALL
            .into_iter()
            .map(|category| (category.name(), category.features().into_iter().collect()))
            .collect()
    });

/// Look up a feature code by category and feature name
///
/// ```
/// use ddc_vcp_control::features;
///
/// assert_eq!(features::lookup("ImageAdjustment", "Luminance"), Some(0x10));
/// assert_eq!(features::lookup("ImageAdjustment", "Brightness"), None);
/// ```
pub fn lookup(category: &str, name: &str) -> Option<FeatureCode> {
    CATALOG.get(category)?.get(name).copied()
}

/// Every catalog entry mapped to `code`
pub fn names_for(code: FeatureCode) -> Vec<(Category, &'static str)> {
    Category::ALL
        .into_iter()
        .flat_map(|category| {
            category
                .features()
                .into_iter()
                .filter(move |(_, c)| *c == code)
                .map(move |(name, _)| (category, name))
        })
        .collect()
}
