//! Display control module for PineTime

use display_interface_spi::SPIInterface;
use embassy_nrf::{gpio::{AnyPin, Output}, peripherals::SPI2, spim::Spim};
use embassy_time::Delay;
use embedded_graphics::{
    geometry::{Point, Size},
    prelude::DrawTarget,
    primitives::Rectangle,
};
use mipidsi::{models::ST7789, Builder, Orientation};

use quadrant_clock::ui::{Watchface, BACKGROUND};

const LCD_W: u16 = 240;
const LCD_H: u16 = 240;

type Lcd = mipidsi::Display<
    SPIInterface<Spim<'static, SPI2>, Output<'static, AnyPin>, Output<'static, AnyPin>>,
    ST7789,
    Output<'static, AnyPin>,
>;

#[derive(Debug, defmt::Format)]
pub enum Error {
    /// The ST7789 did not accept the init sequence
    Init,
    /// Writing to the LCD failed
    Draw,
}

/// ST7789 LCD driven over SPI
pub struct Display {
    lcd: Lcd,
}

impl Display {
    /// Configure the LCD on boot and clear it to the background color
    pub fn init(
        spim: Spim<'static, SPI2>,
        cs: Output<'static, AnyPin>,
        dc: Output<'static, AnyPin>,
        rst: Output<'static, AnyPin>,
    ) -> Result<Self, Error> {
        let lcd = Builder::st7789(SPIInterface::new(spim, dc, cs))
            .with_display_size(LCD_W, LCD_H)
            .with_orientation(Orientation::Portrait(false))
            .init(&mut Delay, Some(rst))
            .map_err(|_| Error::Init)?;

        let mut display = Self { lcd };
        display.clear()?;
        Ok(display)
    }

    /// Full screen area
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(LCD_W as u32, LCD_H as u32))
    }

    /// Clear the display.
    pub fn clear(&mut self) -> Result<(), Error> {
        self.lcd.clear(BACKGROUND).map_err(|_| Error::Draw)
    }

    /// Push the layers of `face` that changed since the last render.
    pub fn render(&mut self, face: &mut Watchface) -> Result<(), Error> {
        face.draw(&mut self.lcd).map_err(|_| Error::Draw)
    }
}
