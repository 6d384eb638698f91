//! Quadrant clock watchface
//!
//! Renders the current time as four separate digits (hour-tens, hour-ones,
//! minute-tens, minute-ones) in a 2×2 grid, redrawn once per minute.
//!
//! The library part is hardware independent and draws into any
//! `embedded_graphics` [`DrawTarget`](embedded_graphics::draw_target::DrawTarget)
//! with `Rgb565` colors. The PineTime firmware in `main.rs` (feature
//! `hardware`) drives it from an embassy executor.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod clock;
pub mod config;
pub mod error;
pub mod glyphs;
pub mod layout;
pub mod ui;

pub use clock::{ClockDigits, HourStyle};
pub use config::{ClockConfig, FaceVariant};
pub use error::Error;
pub use layout::{DisplayShape, QuadrantLayout, Slot};
