//! Watchface rendering the digits with a font

use embedded_graphics::{
    draw_target::{DrawTarget, DrawTargetExt},
    mono_font::{MonoFont, MonoTextStyle},
    primitives::Rectangle,
    text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder},
    Drawable,
};
use profont::PROFONT_24_POINT;

use super::{ColorMode, DigitLayer, WatchFace, WatchFaceState, FOREGROUND};
use crate::{
    clock::ClockDigits,
    layout::{DisplayShape, QuadrantLayout},
    Error,
};

const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Four font-rendered digits in a 2×2 grid. The hour-tens digit is always
/// drawn, a leading zero included.
pub struct TextWatchface {
    character_style: MonoTextStyle<'static, ColorMode>,
    text_style: TextStyle,
    layers: [DigitLayer; 4],
}

impl TextWatchface {
    pub fn layers(&self) -> &[DigitLayer; 4] {
        &self.layers
    }

    pub fn font(&self) -> &'static MonoFont<'static> {
        self.character_style.font
    }
}

impl WatchFace for TextWatchface {
    fn load(bounds: Rectangle, shape: DisplayShape) -> Result<Self, Error> {
        let layout = QuadrantLayout::new(bounds, shape);

        Ok(Self {
            character_style: MonoTextStyle::new(&PROFONT_24_POINT, FOREGROUND),
            text_style: TextStyleBuilder::new()
                .alignment(Alignment::Center)
                .baseline(Baseline::Middle)
                .build(),
            layers: layout.frames().map(DigitLayer::new),
        })
    }

    fn update_time(&mut self, state: &WatchFaceState) -> Result<(), Error> {
        let digits = ClockDigits::from_time(&state.time, state.hour_style);
        for (layer, digit) in self.layers.iter_mut().zip(digits.as_array()) {
            layer.set_digit(Some(digit))?;
        }
        Ok(())
    }

    fn draw<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        let character_style = self.character_style;
        let text_style = self.text_style;
        for layer in self.layers.iter_mut() {
            layer.redraw(target, |digit, frame, target| {
                let text = DIGITS[usize::from(digit)];
                Text::with_text_style(text, frame.center(), character_style, text_style)
                    .draw(&mut target.clipped(&frame))
                    .map(|_| ())
            })?;
        }
        Ok(())
    }

    fn invalidate(&mut self) {
        self.layers.iter_mut().for_each(DigitLayer::mark_dirty);
    }
}
