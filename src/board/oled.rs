//! SSD1306 OLED panel behind the display serializer.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use pocket_arcade::error::Error;
use pocket_arcade::ui::Surface;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Buffered 128×64 panel. Drawing only touches the RAM buffer; `commit`
/// pushes it over I²C.
pub struct Oled<I2C>(Display<I2C>);

impl<I2C> Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the controller and blank the panel.
    pub fn new(i2c: I2C) -> Result<Self, Error> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().map_err(|_| Error::Display)?;
        display.clear_buffer();
        display.flush().map_err(|_| Error::Display)?;
        Ok(Self(display))
    }
}

impl<I2C> OriginDimensions for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn size(&self) -> Size {
        self.0.size()
    }
}

impl<I2C> DrawTarget for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Color = BinaryColor;
    type Error = <Display<I2C> as DrawTarget>::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.0.draw_iter(pixels)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.0.clear(color)
    }
}

impl<I2C> Surface for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn commit(&mut self) -> Result<(), Error> {
        self.0.flush().map_err(|_| Error::Display)
    }
}
