//! UI definitions module
//! Based on: https://github.com/lupyuen/pinetime-watchface/blob/master/src/lib.rs

use chrono::NaiveDateTime;
use embedded_graphics::{
    draw_target::DrawTarget,
    pixelcolor::{Rgb565, RgbColor},
    primitives::Rectangle,
};

use crate::{
    clock::HourStyle,
    config::{ClockConfig, FaceVariant},
    layout::DisplayShape,
    Error,
};

mod bitmap_watchface;
mod layer;
mod text_watchface;

pub use bitmap_watchface::BitmapWatchface;
pub use layer::DigitLayer;
pub use text_watchface::TextWatchface;

/// Color type of the LCD
pub type ColorMode = Rgb565;

pub const BACKGROUND: ColorMode = Rgb565::BLACK;
pub const FOREGROUND: ColorMode = Rgb565::WHITE;

pub trait WatchFace: Sized {
    /// Create the digit layers and load their resources
    fn load(bounds: Rectangle, shape: DisplayShape) -> Result<Self, Error>;

    /// Update watchface with state
    fn update_time(&mut self, state: &WatchFaceState) -> Result<(), Error>;

    /// Draw layers changed since the last call
    fn draw<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>;

    /// Force a full redraw on the next `draw`
    fn invalidate(&mut self);
}

/// State for the watch face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchFaceState {
    pub time: NaiveDateTime,
    pub hour_style: HourStyle,
}

/// Watchface selected at runtime
pub enum Watchface {
    Bitmap(BitmapWatchface),
    Text(TextWatchface),
}

impl Watchface {
    /// Load the variant named in `config`.
    pub fn load(config: &ClockConfig, bounds: Rectangle) -> Result<Self, Error> {
        Ok(match config.variant {
            FaceVariant::Bitmap => Watchface::Bitmap(BitmapWatchface::load(bounds, config.shape)?),
            FaceVariant::Text => Watchface::Text(TextWatchface::load(bounds, config.shape)?),
        })
    }

    pub fn variant(&self) -> FaceVariant {
        match self {
            Watchface::Bitmap(_) => FaceVariant::Bitmap,
            Watchface::Text(_) => FaceVariant::Text,
        }
    }

    pub fn update_time(&mut self, state: &WatchFaceState) -> Result<(), Error> {
        match self {
            Watchface::Bitmap(face) => face.update_time(state),
            Watchface::Text(face) => face.update_time(state),
        }
    }

    pub fn draw<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        match self {
            Watchface::Bitmap(face) => face.draw(target),
            Watchface::Text(face) => face.draw(target),
        }
    }

    pub fn invalidate(&mut self) {
        match self {
            Watchface::Bitmap(face) => face.invalidate(),
            Watchface::Text(face) => face.invalidate(),
        }
    }
}
