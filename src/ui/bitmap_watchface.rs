//! Watchface drawing pre-rendered digit images

use embedded_graphics::{
    draw_target::{DrawTarget, DrawTargetExt},
    geometry::{OriginDimensions, Point},
    image::Image,
    pixelcolor::BinaryColor,
    primitives::Rectangle,
    Drawable,
};

use super::{ColorMode, DigitLayer, WatchFace, WatchFaceState};
use crate::{
    clock::ClockDigits,
    glyphs::DigitGlyphs,
    layout::{DisplayShape, QuadrantLayout},
    Error,
};

/// Four digit images in a 2×2 grid. In 12-hour time the hour-tens layer is
/// hidden while the hour is below 10.
pub struct BitmapWatchface {
    glyphs: DigitGlyphs,
    layers: [DigitLayer; 4],
}

impl BitmapWatchface {
    pub fn layers(&self) -> &[DigitLayer; 4] {
        &self.layers
    }
}

impl WatchFace for BitmapWatchface {
    fn load(bounds: Rectangle, shape: DisplayShape) -> Result<Self, Error> {
        let glyphs = DigitGlyphs::load()?;
        let layout = QuadrantLayout::new(bounds, shape);

        Ok(Self {
            glyphs,
            layers: layout.frames().map(DigitLayer::new),
        })
    }

    fn update_time(&mut self, state: &WatchFaceState) -> Result<(), Error> {
        let digits = ClockDigits::from_time(&state.time, state.hour_style);
        let [hour_tens, hour_ones, minute_tens, minute_ones] = &mut self.layers;

        if digits.hides_hour_tens(state.hour_style) {
            hour_tens.set_digit(None)?;
            hour_tens.set_hidden(true);
        } else {
            hour_tens.set_digit(Some(digits.hour_tens))?;
            hour_tens.set_hidden(false);
        }

        hour_ones.set_digit(Some(digits.hour_ones))?;
        minute_tens.set_digit(Some(digits.minute_tens))?;
        minute_ones.set_digit(Some(digits.minute_ones))?;

        Ok(())
    }

    fn draw<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        let glyphs = &self.glyphs;
        for layer in self.layers.iter_mut() {
            layer.redraw(target, |digit, frame, target| {
                let Some(image) = glyphs.get(digit) else {
                    return Ok(());
                };

                // Center the image, anything outside the frame is clipped
                let size = image.size();
                let offset = Point::new(
                    (frame.size.width as i32 - size.width as i32) / 2,
                    (frame.size.height as i32 - size.height as i32) / 2,
                );

                let mut clipped = target.clipped(&frame);
                let mut converted = clipped.color_converted::<BinaryColor>();
                Image::new(image, frame.top_left + offset).draw(&mut converted)
            })?;
        }
        Ok(())
    }

    fn invalidate(&mut self) {
        self.layers.iter_mut().for_each(DigitLayer::mark_dirty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clock::HourStyle,
        glyphs::{GLYPH_HEIGHT, GLYPH_WIDTH},
        layout::Slot,
        ui::{test_display::TestDisplay, BACKGROUND, FOREGROUND},
    };
    use chrono::NaiveDate;
    use std::collections::HashSet;
    use embedded_graphics::{
        geometry::Size,
        primitives::{ContainsPoint, PointsIter},
    };

    fn state(hour: u32, minute: u32, hour_style: HourStyle) -> WatchFaceState {
        WatchFaceState {
            time: NaiveDate::from_ymd_opt(2024, 3, 3)
                .unwrap()
                .and_hms_opt(hour, minute, 30)
                .unwrap(),
            hour_style,
        }
    }

    fn glyph_area(frame: Rectangle) -> Rectangle {
        let offset = Point::new(
            (frame.size.width as i32 - GLYPH_WIDTH as i32) / 2,
            (frame.size.height as i32 - GLYPH_HEIGHT as i32) / 2,
        );
        Rectangle::new(frame.top_left + offset, Size::new(GLYPH_WIDTH, GLYPH_HEIGHT))
    }

    fn loaded(display: &TestDisplay) -> BitmapWatchface {
        BitmapWatchface::load(display.bounds(), DisplayShape::Rectangular).unwrap()
    }

    #[test]
    fn layers_follow_layout() {
        let display = TestDisplay::new(240, 240);
        let face = loaded(&display);
        let layout = QuadrantLayout::new(display.bounds(), DisplayShape::Rectangular);
        for (slot, frame) in layout.iter() {
            assert_eq!(face.layers()[slot.index()].frame(), frame);
        }
    }

    #[test]
    fn twelve_hour_morning_hides_hour_tens() {
        let mut display = TestDisplay::new(240, 240);
        let mut face = loaded(&display);
        face.update_time(&state(9, 0, HourStyle::TwelveHour)).unwrap();

        let layers = face.layers();
        assert!(layers[Slot::HourTens.index()].is_hidden());
        assert_eq!(layers[Slot::HourOnes.index()].digit(), Some(9));
        assert_eq!(layers[Slot::MinuteTens.index()].digit(), Some(0));
        assert_eq!(layers[Slot::MinuteOnes.index()].digit(), Some(0));

        face.draw(&mut display).unwrap();
        let hour_tens = face.layers()[Slot::HourTens.index()].frame();
        assert!(display.all_background(hour_tens));
        for slot in [Slot::HourOnes, Slot::MinuteTens, Slot::MinuteOnes] {
            assert!(display.lit(face.layers()[slot.index()].frame()) > 0);
        }
    }

    #[test]
    fn twenty_four_hour_shows_leading_zero() {
        let mut display = TestDisplay::new(240, 240);
        let mut face = loaded(&display);
        face.update_time(&state(9, 0, HourStyle::TwentyFourHour)).unwrap();
        face.draw(&mut display).unwrap();

        let hour_tens = &face.layers()[Slot::HourTens.index()];
        assert!(!hour_tens.is_hidden());
        assert_eq!(hour_tens.digit(), Some(0));
        assert!(display.lit(hour_tens.frame()) > 0);
    }

    #[test]
    fn midnight_twelve_hour_shows_twelve() {
        let mut display = TestDisplay::new(240, 240);
        let mut face = loaded(&display);
        face.update_time(&state(0, 5, HourStyle::TwelveHour)).unwrap();

        let digits: [Option<u8>; 4] = [
            face.layers()[0].visible_digit(),
            face.layers()[1].visible_digit(),
            face.layers()[2].visible_digit(),
            face.layers()[3].visible_digit(),
        ];
        assert_eq!(digits, [Some(1), Some(2), Some(0), Some(5)]);
    }

    #[test]
    fn glyph_is_centered_in_frame() {
        let mut display = TestDisplay::new(240, 240);
        let mut face = loaded(&display);
        face.update_time(&state(18, 8, HourStyle::TwentyFourHour)).unwrap();
        face.draw(&mut display).unwrap();

        for layer in face.layers() {
            let frame = layer.frame();
            let glyph = glyph_area(frame);
            let outside_glyph = frame
                .points()
                .filter(|p| !glyph.contains(*p))
                .all(|p| display.pixel(p.x, p.y) == BACKGROUND);
            assert!(outside_glyph);
        }

        // Digit 8 lights its top-left corner
        let minute_ones = glyph_area(face.layers()[Slot::MinuteOnes.index()].frame());
        let corner = minute_ones.top_left + Point::new(5, 5);
        assert_eq!(display.pixel(corner.x, corner.y), FOREGROUND);
    }

    #[test]
    fn only_changed_layers_are_redrawn() {
        let mut display = TestDisplay::new(240, 240);
        let mut face = loaded(&display);
        face.update_time(&state(10, 8, HourStyle::TwentyFourHour)).unwrap();
        face.draw(&mut display).unwrap();

        // Same minute again, nothing to do
        display.clear_log();
        face.update_time(&state(10, 8, HourStyle::TwentyFourHour)).unwrap();
        face.draw(&mut display).unwrap();
        assert!(display.writes.is_empty());

        // Next minute only touches minute-ones
        face.update_time(&state(10, 9, HourStyle::TwentyFourHour)).unwrap();
        face.draw(&mut display).unwrap();
        let minute_ones = face.layers()[Slot::MinuteOnes.index()].frame();
        assert!(!display.writes.is_empty());
        assert!(display.writes.iter().all(|p| minute_ones.contains(*p)));
    }

    #[test]
    fn invalidate_redraws_everything() {
        let mut display = TestDisplay::new(240, 240);
        let mut face = loaded(&display);
        face.update_time(&state(21, 45, HourStyle::TwentyFourHour)).unwrap();
        face.draw(&mut display).unwrap();

        display.clear_log();
        face.invalidate();
        face.draw(&mut display).unwrap();
        let written: HashSet<Point> = display.writes.iter().copied().collect();
        for layer in face.layers() {
            assert!(layer.frame().points().all(|p| written.contains(&p)));
        }
    }

    #[test]
    fn small_round_display_clips_glyphs() {
        let mut display = TestDisplay::new(180, 180);
        let mut face = BitmapWatchface::load(display.bounds(), DisplayShape::Round).unwrap();
        face.update_time(&state(23, 59, HourStyle::TwentyFourHour)).unwrap();
        face.draw(&mut display).unwrap();

        // Nothing is drawn into the padding ring
        let inner = Rectangle::new(Point::new(10, 10), Size::new(160, 160));
        assert!(display.writes.iter().all(|p| inner.contains(*p)));
        for layer in face.layers() {
            assert!(display.lit(layer.frame()) > 0);
        }
    }
}
