//! Watchface configuration

use crate::{clock::HourStyle, layout::DisplayShape};

/// How the digits are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceVariant {
    /// Pre-rendered digit images, leading 12-hour zero hidden
    #[default]
    Bitmap,
    /// Font-rendered digits, leading zero always drawn
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    pub shape: DisplayShape,
    pub variant: FaceVariant,
    /// Initial hour style, the user can toggle it at runtime
    pub hour_style: HourStyle,
}

impl ClockConfig {
    /// Configuration selected by the `round`, `text-digits` and `twelve-hour`
    /// crate features.
    pub const fn from_features() -> Self {
        Self {
            shape: if cfg!(feature = "round") {
                DisplayShape::Round
            } else {
                DisplayShape::Rectangular
            },
            variant: if cfg!(feature = "text-digits") {
                FaceVariant::Text
            } else {
                FaceVariant::Bitmap
            },
            hour_style: if cfg!(feature = "twelve-hour") {
                HourStyle::TwelveHour
            } else {
                HourStyle::TwentyFourHour
            },
        }
    }
}
