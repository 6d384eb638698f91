//! Embedded digit images
//!
//! The ten images in `assets/` are 1 bit per pixel, packed row by row with
//! the most significant bit first. Regenerate them with
//! `tools/generate_digits.py`.

use embedded_graphics::{image::ImageRaw, pixelcolor::BinaryColor};

use crate::Error;

pub const GLYPH_WIDTH: u32 = 64;
pub const GLYPH_HEIGHT: u32 = 96;

const GLYPH_BYTES: usize = (GLYPH_WIDTH as usize / 8) * GLYPH_HEIGHT as usize;

/// Digit image resources, indexed by digit.
pub static DIGIT_RESOURCES: [&[u8]; 10] = [
    include_bytes!("../assets/digit_0.raw"),
    include_bytes!("../assets/digit_1.raw"),
    include_bytes!("../assets/digit_2.raw"),
    include_bytes!("../assets/digit_3.raw"),
    include_bytes!("../assets/digit_4.raw"),
    include_bytes!("../assets/digit_5.raw"),
    include_bytes!("../assets/digit_6.raw"),
    include_bytes!("../assets/digit_7.raw"),
    include_bytes!("../assets/digit_8.raw"),
    include_bytes!("../assets/digit_9.raw"),
];

/// The ten digit images.
pub struct DigitGlyphs {
    images: [ImageRaw<'static, BinaryColor>; 10],
}

impl DigitGlyphs {
    /// Load the built-in digit images.
    pub fn load() -> Result<Self, Error> {
        Self::from_resources(&DIGIT_RESOURCES)
    }

    /// Load digit images from raw 1-bit resources.
    pub fn from_resources(resources: &[&'static [u8]; 10]) -> Result<Self, Error> {
        for (digit, data) in resources.iter().enumerate() {
            if data.len() != GLYPH_BYTES {
                return Err(Error::MissingGlyph(digit as u8));
            }
        }

        Ok(Self {
            images: (*resources).map(|data| ImageRaw::new(data, GLYPH_WIDTH)),
        })
    }

    pub fn get(&self, digit: u8) -> Option<&ImageRaw<'static, BinaryColor>> {
        self.images.get(usize::from(digit))
    }
}
