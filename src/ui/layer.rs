//! Digit layer

use embedded_graphics::{draw_target::DrawTarget, primitives::Rectangle};

use super::{ColorMode, BACKGROUND};
use crate::Error;

/// One quadrant of the screen showing a single digit.
///
/// The layer only remembers what it shows; the watchface owning it decides
/// how a digit is drawn. A layer is dirty until the next draw whenever its
/// digit or visibility changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitLayer {
    frame: Rectangle,
    digit: Option<u8>,
    hidden: bool,
    dirty: bool,
}

impl DigitLayer {
    pub fn new(frame: Rectangle) -> Self {
        Self {
            frame,
            digit: None,
            hidden: false,
            dirty: true,
        }
    }

    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    pub fn digit(&self) -> Option<u8> {
        self.digit
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Set the digit shown, `None` leaves the layer empty.
    pub fn set_digit(&mut self, digit: Option<u8>) -> Result<(), Error> {
        if let Some(value) = digit.filter(|d| *d > 9) {
            return Err(Error::DigitOutOfRange(value));
        }
        if self.digit != digit {
            self.digit = digit;
            self.dirty = true;
        }
        Ok(())
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        if self.hidden != hidden {
            self.hidden = hidden;
            self.dirty = true;
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Digit to draw, if the layer is visible and has one.
    pub fn visible_digit(&self) -> Option<u8> {
        if self.hidden {
            None
        } else {
            self.digit
        }
    }

    /// Clear the frame and hand the visible digit to `render` if the layer is
    /// dirty. Clean layers are left untouched.
    pub fn redraw<D, F>(&mut self, target: &mut D, render: F) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
        F: FnOnce(u8, Rectangle, &mut D) -> Result<(), D::Error>,
    {
        if !self.dirty {
            return Ok(());
        }

        target.fill_solid(&self.frame, BACKGROUND)?;
        if let Some(digit) = self.visible_digit() {
            render(digit, self.frame, target)?;
        }

        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        geometry::{Point, Size},
        mock_display::MockDisplay,
        pixelcolor::RgbColor,
    };

    fn frame() -> Rectangle {
        Rectangle::new(Point::new(2, 3), Size::new(8, 6))
    }

    #[test]
    fn new_layer_is_dirty_and_empty() {
        let layer = DigitLayer::new(frame());
        assert!(layer.is_dirty());
        assert_eq!(layer.digit(), None);
        assert!(!layer.is_hidden());
    }

    #[test]
    fn rejects_non_digits() {
        let mut layer = DigitLayer::new(frame());
        assert_eq!(layer.set_digit(Some(10)), Err(Error::DigitOutOfRange(10)));
        assert_eq!(layer.digit(), None);
    }

    #[test]
    fn same_digit_keeps_layer_clean() {
        let mut display = MockDisplay::<ColorMode>::new();
        let mut layer = DigitLayer::new(frame());
        layer.set_digit(Some(4)).unwrap();
        layer.redraw(&mut display, |_, _, _| Ok(())).unwrap();
        assert!(!layer.is_dirty());

        layer.set_digit(Some(4)).unwrap();
        layer.set_hidden(false);
        assert!(!layer.is_dirty());

        layer.set_digit(Some(5)).unwrap();
        assert!(layer.is_dirty());
    }

    #[test]
    fn redraw_clears_frame_and_renders_digit() {
        let mut display = MockDisplay::<ColorMode>::new();
        display.set_allow_overdraw(true);

        let mut layer = DigitLayer::new(frame());
        layer.set_digit(Some(7)).unwrap();

        let mut rendered = None;
        layer
            .redraw(&mut display, |digit, area, target| {
                rendered = Some((digit, area));
                target.fill_solid(&Rectangle::new(area.top_left, Size::new(1, 1)), ColorMode::WHITE)
            })
            .unwrap();

        assert_eq!(rendered, Some((7, frame())));
        assert_eq!(display.affected_area(), frame());
        assert_eq!(display.get_pixel(Point::new(2, 3)), Some(ColorMode::WHITE));
        assert_eq!(display.get_pixel(Point::new(9, 8)), Some(BACKGROUND));
    }

    #[test]
    fn hidden_layer_is_only_cleared() {
        let mut display = MockDisplay::<ColorMode>::new();
        let mut layer = DigitLayer::new(frame());
        layer.set_digit(Some(0)).unwrap();
        layer.set_hidden(true);
        assert_eq!(layer.visible_digit(), None);

        layer
            .redraw(&mut display, |_, _, _| panic!("hidden layer rendered"))
            .unwrap();
        assert_eq!(display.affected_area(), frame());
    }

    #[test]
    fn clean_layer_draws_nothing() {
        let mut display = MockDisplay::<ColorMode>::new();
        let mut layer = DigitLayer::new(frame());
        layer.redraw(&mut display, |_, _, _| Ok(())).unwrap();

        let mut second = MockDisplay::<ColorMode>::new();
        layer.redraw(&mut second, |_, _, _| Ok(())).unwrap();
        assert_eq!(second.affected_area(), Rectangle::zero());
    }
}
