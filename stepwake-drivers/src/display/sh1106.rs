//! SH1106 OLED display driver
//!
//! Driver for 128x64 SH1106-based OLED displays via I2C. Keeps a frame
//! buffer that embedded-graphics draws into and shows one large centred
//! line of text for the watch face.

use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use embedded_hal::i2c::I2c;
use stepwake_core::traits::{DisplayError, TextDisplay};

/// SH1106 I2C address (typically 0x3C or 0x3D)
pub const SH1106_ADDR: u8 = 0x3C;

/// Display dimensions
const WIDTH: usize = 128;
const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;

/// SH1106 RAM is 132 columns wide; the panel starts at column 2
const COLUMN_OFFSET: u8 = 2;

/// Glyph width of the face font
const GLYPH_WIDTH: usize = 10;

/// SH1106 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Control byte prefixes
const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// SH1106 OLED driver
pub struct Sh1106<I2C> {
    i2c: I2C,
    address: u8,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: [[u8; WIDTH]; PAGES],
}

impl<I2C: I2c> Sh1106<I2C> {
    /// Create a driver at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, SH1106_ADDR)
    }

    /// Create a driver at a custom address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: [[0; WIDTH]; PAGES],
        }
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Initialize the display
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::SET_CHARGE_PUMP,
            0x14,                  // Enable charge pump
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config
            cmd::SET_CONTRAST,
            0xCF, // High contrast
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c)?;
        }

        self.clear();
        self.flush()
    }

    /// Send a command to the display
    fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, cmd])
    }

    /// Clear the frame buffer
    pub fn clear(&mut self) {
        for page in self.buffer.iter_mut() {
            page.fill(0);
        }
    }

    /// Flush the frame buffer to the display
    pub fn flush(&mut self) -> Result<(), I2C::Error> {
        for page in 0..PAGES {
            self.command(cmd::SET_PAGE_ADDR | page as u8)?;
            self.command(cmd::SET_LOW_COLUMN | (COLUMN_OFFSET & 0x0F))?;
            self.command(cmd::SET_HIGH_COLUMN | (COLUMN_OFFSET >> 4))?;

            let mut data = [0u8; WIDTH + 1];
            data[0] = CONTROL_DATA;
            data[1..].copy_from_slice(&self.buffer[page]);
            self.i2c.write(self.address, &data)?;
        }

        Ok(())
    }

    /// Turn display on/off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), I2C::Error> {
        if on {
            self.command(cmd::DISPLAY_ON)
        } else {
            self.command(cmd::DISPLAY_OFF)
        }
    }

    /// Draw `text` centred in the frame buffer
    fn draw_centered(&mut self, text: &str) {
        let character_style = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        let center = Point::new(WIDTH as i32 / 2, HEIGHT as i32 / 2);

        if let Err(e) = Text::with_text_style(text, center, character_style, text_style).draw(self) {
            match e {}
        }
    }
}

impl<I2C> OriginDimensions for Sh1106<I2C> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<I2C> DrawTarget for Sh1106<I2C> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
                continue;
            };
            if x >= WIDTH || y >= HEIGHT {
                continue;
            }

            let bit = 1u8 << (y % 8);
            let byte = &mut self.buffer[y / 8][x];
            if color.is_on() {
                *byte |= bit;
            } else {
                *byte &= !bit;
            }
        }
        Ok(())
    }
}

impl<I2C: I2c> TextDisplay for Sh1106<I2C> {
    fn set_text(&mut self, text: &str) -> Result<(), DisplayError> {
        if text.chars().count() * GLYPH_WIDTH > WIDTH {
            return Err(DisplayError::TooLong);
        }

        self.clear();
        self.draw_centered(text);
        self.flush().map_err(|_| DisplayError::Bus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

    /// Mock I2C bus recording every write
    #[derive(Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl ErrorType for MockI2c {
        type Error = ErrorKind;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            for op in operations {
                if let Operation::Write(bytes) = op {
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    fn data_writes(i2c: &MockI2c) -> Vec<&Vec<u8>> {
        i2c.writes
            .iter()
            .filter(|(_, bytes)| bytes[0] == CONTROL_DATA)
            .map(|(_, bytes)| bytes)
            .collect()
    }

    #[test]
    fn test_init_sequence() {
        let mut display = Sh1106::new(MockI2c::default());
        display.init().unwrap();

        let i2c = display.release();
        assert!(i2c.writes.iter().all(|(addr, _)| *addr == SH1106_ADDR));
        assert_eq!(i2c.writes[0].1, vec![CONTROL_COMMAND, cmd::DISPLAY_OFF]);
        assert!(i2c
            .writes
            .iter()
            .any(|(_, bytes)| bytes == &vec![CONTROL_COMMAND, cmd::DISPLAY_ON]));
        // Blank frame pushed after init
        let data = data_writes(&i2c);
        assert_eq!(data.len(), PAGES);
        assert!(data.iter().all(|page| page[1..].iter().all(|&b| b == 0)));
    }

    #[test]
    fn test_set_text_draws_in_middle() {
        let mut display = Sh1106::new(MockI2c::default());
        display.set_text("14:05").unwrap();

        let i2c = display.release();
        // 3 addressing commands + 1 data write per page
        assert_eq!(i2c.writes.len(), PAGES * 4);

        let data = data_writes(&i2c);
        assert_eq!(data.len(), PAGES);
        for page in &data {
            assert_eq!(page.len(), WIDTH + 1);
        }
        // Text sits in the middle rows, top and bottom pages stay dark
        assert!(data[0][1..].iter().all(|&b| b == 0));
        assert!(data[PAGES - 1][1..].iter().all(|&b| b == 0));
        assert!(data[3][1..].iter().any(|&b| b != 0));
        // Leftmost columns stay dark for a five character string
        assert!(data.iter().all(|page| page[1..10].iter().all(|&b| b == 0)));
    }

    #[test]
    fn test_set_text_replaces_previous() {
        let mut display = Sh1106::new(MockI2c::default());
        display.set_text("88:88").unwrap();
        display.set_text("").unwrap();

        assert!(display
            .buffer
            .iter()
            .all(|page| page.iter().all(|&b| b == 0)));
    }

    #[test]
    fn test_text_too_long() {
        let mut display = Sh1106::new(MockI2c::default());
        assert_eq!(
            display.set_text("this does not fit"),
            Err(DisplayError::TooLong)
        );
        assert!(display.release().writes.is_empty());
    }

    #[test]
    fn test_bus_error() {
        let mut display = Sh1106::new(MockI2c {
            fail: true,
            ..Default::default()
        });
        assert_eq!(display.set_text("12:00"), Err(DisplayError::Bus));
    }

    #[test]
    fn test_draw_clips_off_screen_pixels() {
        let mut display = Sh1106::new(MockI2c::default());
        display
            .draw_iter([
                Pixel(Point::new(-1, 0), BinaryColor::On),
                Pixel(Point::new(128, 0), BinaryColor::On),
                Pixel(Point::new(0, 64), BinaryColor::On),
                Pixel(Point::new(3, 9), BinaryColor::On),
            ])
            .unwrap();

        assert_eq!(display.buffer[1][3], 0b0000_0010);
        let lit: u32 = display
            .buffer
            .iter()
            .flat_map(|page| page.iter())
            .map(|b| b.count_ones())
            .sum();
        assert_eq!(lit, 1);
    }
}
