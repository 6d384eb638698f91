//! Error type for the watchface library

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The embedded image for this digit is missing or has the wrong size.
    MissingGlyph(u8),
    /// A digit layer was given a value outside `0..=9`.
    DigitOutOfRange(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingGlyph(digit) => write!(f, "glyph for digit {} is missing", digit),
            Error::DigitOutOfRange(value) => write!(f, "{} is not a single decimal digit", value),
        }
    }
}
