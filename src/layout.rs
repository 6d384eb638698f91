//! Quadrant layout for the four digit layers

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

/// Inset from the screen edge on round displays.
pub const ROUND_PADDING: u32 = 10;

/// Shape of the display panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayShape {
    #[default]
    Rectangular,
    Round,
}

/// Position of a digit in the 2×2 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Slot {
    HourTens = 0,
    HourOnes = 1,
    MinuteTens = 2,
    MinuteOnes = 3,
}

impl Slot {
    pub const ALL: [Slot; 4] = [
        Slot::HourTens,
        Slot::HourOnes,
        Slot::MinuteTens,
        Slot::MinuteOnes,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Frames of the four digit layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantLayout {
    frames: [Rectangle; 4],
}

impl QuadrantLayout {
    /// Split `bounds` into four quadrants.
    ///
    /// The top row is one pixel shorter than the bottom row so the two rows
    /// do not touch. Round displays are inset by [`ROUND_PADDING`] on every
    /// side before splitting.
    pub fn new(bounds: Rectangle, shape: DisplayShape) -> Self {
        let padding = match shape {
            DisplayShape::Rectangular => 0,
            DisplayShape::Round => ROUND_PADDING,
        };

        let width = bounds.size.width.saturating_sub(2 * padding) / 2;
        let height = bounds.size.height.saturating_sub(2 * padding) / 2;
        let origin = bounds.top_left + Point::new(padding as i32, padding as i32);

        let top = Size::new(width, height.saturating_sub(1));
        let bottom = Size::new(width, height);
        let right = width as i32;
        let lower = height as i32;

        Self {
            frames: [
                Rectangle::new(origin, top),
                Rectangle::new(origin + Point::new(right, 0), top),
                Rectangle::new(origin + Point::new(0, lower), bottom),
                Rectangle::new(origin + Point::new(right, lower), bottom),
            ],
        }
    }

    /// Frames in slot order.
    pub fn frames(&self) -> [Rectangle; 4] {
        self.frames
    }

    pub fn frame(&self, slot: Slot) -> Rectangle {
        self.frames[slot.index()]
    }

    /// Slots with their frames, in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Rectangle)> + '_ {
        Slot::ALL.iter().map(move |slot| (*slot, self.frame(*slot)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i32, y: i32, w: u32, h: u32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn rectangular_pinetime() {
        let layout = QuadrantLayout::new(rect(0, 0, 240, 240), DisplayShape::Rectangular);
        assert_eq!(layout.frame(Slot::HourTens), rect(0, 0, 120, 119));
        assert_eq!(layout.frame(Slot::HourOnes), rect(120, 0, 120, 119));
        assert_eq!(layout.frame(Slot::MinuteTens), rect(0, 120, 120, 120));
        assert_eq!(layout.frame(Slot::MinuteOnes), rect(120, 120, 120, 120));
    }

    #[test]
    fn rectangular_144_by_168() {
        let layout = QuadrantLayout::new(rect(0, 0, 144, 168), DisplayShape::Rectangular);
        assert_eq!(layout.frame(Slot::HourTens), rect(0, 0, 72, 83));
        assert_eq!(layout.frame(Slot::HourOnes), rect(72, 0, 72, 83));
        assert_eq!(layout.frame(Slot::MinuteTens), rect(0, 84, 72, 84));
        assert_eq!(layout.frame(Slot::MinuteOnes), rect(72, 84, 72, 84));
    }

    #[test]
    fn round_is_padded() {
        let layout = QuadrantLayout::new(rect(0, 0, 180, 180), DisplayShape::Round);
        assert_eq!(layout.frame(Slot::HourTens), rect(10, 10, 80, 79));
        assert_eq!(layout.frame(Slot::HourOnes), rect(90, 10, 80, 79));
        assert_eq!(layout.frame(Slot::MinuteTens), rect(10, 90, 80, 80));
        assert_eq!(layout.frame(Slot::MinuteOnes), rect(90, 90, 80, 80));
    }

    #[test]
    fn iteration_order() {
        let layout = QuadrantLayout::new(rect(0, 0, 240, 240), DisplayShape::Round);
        let slots: [Slot; 4] = {
            let mut slots = [Slot::HourTens; 4];
            for (i, (slot, frame)) in layout.iter().enumerate() {
                assert_eq!(frame, layout.frame(slot));
                slots[i] = slot;
            }
            slots
        };
        assert_eq!(slots, Slot::ALL);
    }
}
