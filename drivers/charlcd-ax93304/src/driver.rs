//! AX93304 device driver
//!
//! Keeps a 16x2 framebuffer plus the render-mode state for the module's
//! 8 programmable glyph slots, and emits the module's fixed command byte
//! sequences over the serial link. Slot bitmaps are never diffed: a mode
//! entry reprograms its whole glyph set.

use std::io;

use charlcd_core::bars::{self, BarStyle};
use charlcd_core::framebuffer::Framebuffer;
use charlcd_core::glyph::{GlyphBitmap, GLYPH_ROWS, GLYPH_SLOTS};
use charlcd_core::icons::{Icon, IconOutcome};
use charlcd_core::input::Key;
use charlcd_core::mode::{ModeTransition, RenderMode};
use charlcd_core::traits::DisplayDriver;
use log::{debug, warn};

use crate::config::Config;
use crate::glyphs;
use crate::transport::{SerialPort, Transport};

/// Character grid dimensions
const WIDTH: u16 = 16;
const HEIGHT: u16 = 2;

/// Glyph cell dimensions in pixels
const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 8;

/// Display codes the module firmware cannot show; they are replaced with
/// a space before storage
const FORBIDDEN: core::ops::RangeInclusive<u8> = 0x80..=0x97;

/// CGROM code of a completely filled cell
const FULL_BLOCK: u8 = 0xFF;

/// CGROM codes of the left/right arrows
const CGROM_ARROW_LEFT: u8 = 0x1B;
const CGROM_ARROW_RIGHT: u8 = 0x1A;

/// Display code of the glyph in slot 1; bar cap glyphs count up from here
const BAR_BASE_GLYPH: u8 = 0x01;

/// AX93304 command sequences
mod cmd {
    /// Clear the screen and home the cursor
    pub const CLEAR_HOME: [u8; 4] = [0xFE, 0x01, 0xFE, 0x02];
    /// Move the cursor to line 2, column 1
    pub const GOTO_LINE2: [u8; 2] = [0xFE, 0xC0];
    /// Backlight on
    pub const BACKLIGHT_ON: [u8; 2] = [0xFB, 0xFB];
    /// Backlight off
    pub const BACKLIGHT_OFF: [u8; 2] = [0xFB, 0xFC];
    /// Display and backlight off, issued at close
    pub const DISPLAY_OFF: [u8; 4] = [0xFE, 0x08, 0xFB, 0xFC];
    /// Command prefix
    pub const ESC: u8 = 0xFE;
    /// CGRAM write address for slot `n` is `ESC`, `CGRAM_BASE + n * 8`
    pub const CGRAM_BASE: u8 = 0x40;
    /// Return from CGRAM writing to normal operation
    pub const CGRAM_EXIT: [u8; 2] = [0xFE, 0xFF];
    /// Request one key byte
    pub const POLL_KEY: [u8; 1] = [0xFD];
}

/// Key bytes the module sends back when polled
mod key {
    pub const UP: u8 = b'M';
    pub const DOWN: u8 = b'G';
    pub const ESCAPE: u8 = b'K';
    pub const ENTER: u8 = b'N';
}

/// AX93304 driver over a serial transport
pub struct Ax93304<T> {
    link: T,
    framebuf: Framebuffer,
    ccmode: RenderMode,
}

impl Ax93304<SerialPort> {
    /// Open the configured serial device and reset the display
    pub fn open(config: &Config) -> io::Result<Self> {
        let port = SerialPort::open(&config.device, config.speed_or_default())?;
        let mut driver = Self::new(port)?;
        driver.init()?;
        Ok(driver)
    }
}

impl<T: Transport> Ax93304<T> {
    /// Create a driver over an already-configured link
    pub fn new(link: T) -> io::Result<Self> {
        let framebuf = Framebuffer::new(WIDTH, HEIGHT).ok_or_else(|| {
            io::Error::new(io::ErrorKind::OutOfMemory, "unable to create framebuffer")
        })?;
        Ok(Self {
            link,
            framebuf,
            ccmode: RenderMode::Standard,
        })
    }

    /// Reset and clear the module
    pub fn init(&mut self) -> io::Result<()> {
        self.link.send(&cmd::CLEAR_HOME)?;
        debug!("ax93304: init done");
        Ok(())
    }

    /// Put the module into its OFF state and release the link
    pub fn close(mut self) -> io::Result<T> {
        self.link.send(&cmd::DISPLAY_OFF)?;
        Ok(self.link)
    }

    /// Emit bytes, logging a failure instead of surfacing it
    ///
    /// Past initialization the display is best effort; a failed write
    /// costs at most a garbled frame that the next flush repaints.
    fn send(&mut self, bytes: &[u8]) {
        if let Err(err) = self.link.send(bytes) {
            warn!("ax93304: write failed: {err}");
        }
    }

    /// Replace a forbidden display code with a space
    fn sanitize(c: u8) -> u8 {
        if FORBIDDEN.contains(&c) {
            warn!("ax93304: illegal char {c:#04x} requested");
            b' '
        } else {
            c
        }
    }

    /// Program one CGRAM slot with an 8-row bitmap
    ///
    /// Emits `ESC addr`, 8 row bytes masked to the cell width, then the
    /// exit sequence, as one ordered write.
    fn program_glyph(&mut self, slot: u8, bitmap: &GlyphBitmap) {
        if slot >= GLYPH_SLOTS {
            warn!("ax93304: glyph slot {slot} out of range");
            return;
        }

        let mask = (1u8 << CELL_WIDTH) - 1;
        let mut seq = [0u8; 2 + GLYPH_ROWS + 2];
        seq[0] = cmd::ESC;
        seq[1] = cmd::CGRAM_BASE + slot * 8;
        for (row, &bits) in bitmap.iter().enumerate() {
            seq[2 + row] = bits & mask;
        }
        seq[2 + GLYPH_ROWS..].copy_from_slice(&cmd::CGRAM_EXIT);
        self.send(&seq);
    }

    /// Program an icon glyph and place it
    fn put_glyph_icon(&mut self, x: u16, y: u16, slot: u8, bitmap: &GlyphBitmap) -> IconOutcome {
        self.program_glyph(slot, bitmap);
        self.chr(x, y, slot);
        IconOutcome::Handled
    }
}

impl<T: Transport> DisplayDriver for Ax93304<T> {
    fn width(&self) -> u16 {
        WIDTH
    }

    fn height(&self) -> u16 {
        HEIGHT
    }

    fn cell_width(&self) -> u16 {
        CELL_WIDTH
    }

    fn cell_height(&self) -> u16 {
        CELL_HEIGHT
    }

    fn clear(&mut self) {
        self.framebuf.clear();
        self.ccmode = RenderMode::Standard;
    }

    fn flush(&mut self) {
        let mut line = [0u8; WIDTH as usize];

        self.send(&cmd::CLEAR_HOME);
        line.copy_from_slice(self.framebuf.row(0));
        self.send(&line);
        self.send(&cmd::GOTO_LINE2);
        line.copy_from_slice(self.framebuf.row(1));
        self.send(&line);
    }

    fn string(&mut self, x: u16, y: u16, text: &str) {
        if x < 1 || y < 1 {
            warn!("ax93304: string position ({x},{y}) out of range");
            return;
        }

        let base = (y as usize - 1) * WIDTH as usize + (x as usize - 1);
        for (i, &c) in text.as_bytes().iter().enumerate() {
            // Truncate at the end of the framebuffer
            if base + i >= self.framebuf.cell_count() {
                break;
            }
            self.framebuf.set_linear(base + i, Self::sanitize(c));
        }
    }

    fn chr(&mut self, x: u16, y: u16, c: u8) {
        if x < 1 || y < 1 {
            warn!("ax93304: char position ({x},{y}) out of range");
            return;
        }
        let c = Self::sanitize(c);
        if !self.framebuf.set(x - 1, y - 1, c) {
            warn!("ax93304: char position ({x},{y}) out of range");
        }
    }

    fn vbar(&mut self, x: u16, y: u16, len: u16, promille: u16, _options: u16) {
        match self.ccmode.request(RenderMode::VBar) {
            ModeTransition::Rejected => {
                warn!("ax93304: cannot combine two modes using user-defined characters");
                return;
            }
            ModeTransition::Program => {
                self.ccmode = RenderMode::VBar;
                for (i, bitmap) in glyphs::VBAR_UP.iter().enumerate() {
                    self.program_glyph(i as u8 + 1, bitmap);
                }
            }
            ModeTransition::AlreadyActive => {}
        }

        let style = BarStyle {
            cell_px: CELL_HEIGHT as u8,
            base_glyph: BAR_BASE_GLYPH,
            full_block: FULL_BLOCK,
        };
        bars::vbar_static(x, y, len, promille, &style, |cx, cy, code| {
            self.chr(cx, cy, code)
        });
    }

    fn hbar(&mut self, x: u16, y: u16, len: u16, promille: u16, _options: u16) {
        match self.ccmode.request(RenderMode::HBar) {
            ModeTransition::Rejected => {
                warn!("ax93304: cannot combine two modes using user-defined characters");
                return;
            }
            ModeTransition::Program => {
                self.ccmode = RenderMode::HBar;
                for (i, bitmap) in glyphs::HBAR_RIGHT.iter().enumerate() {
                    self.program_glyph(i as u8 + 1, bitmap);
                }
            }
            ModeTransition::AlreadyActive => {}
        }

        let style = BarStyle {
            cell_px: CELL_WIDTH as u8,
            base_glyph: BAR_BASE_GLYPH,
            full_block: FULL_BLOCK,
        };
        bars::hbar_static(x, y, len, promille, &style, |cx, cy, code| {
            self.chr(cx, cy, code)
        });
    }

    fn icon(&mut self, x: u16, y: u16, icon: Icon) -> IconOutcome {
        // Icons from CGROM always work
        match icon {
            Icon::ArrowLeft => {
                self.chr(x, y, CGROM_ARROW_LEFT);
                return IconOutcome::Handled;
            }
            Icon::ArrowRight => {
                self.chr(x, y, CGROM_ARROW_RIGHT);
                return IconOutcome::Handled;
            }
            _ => {}
        }

        match icon {
            // The heartbeat shares slot 7 and is unavailable while the
            // vbar or bignum glyph sets hold the slots
            Icon::HeartOpen | Icon::HeartFilled => {
                if matches!(self.ccmode, RenderMode::BigNum | RenderMode::VBar) {
                    return IconOutcome::Unhandled;
                }
                let bitmap = if icon == Icon::HeartFilled {
                    &glyphs::HEART_FILLED
                } else {
                    &glyphs::HEART_OPEN
                };
                self.put_glyph_icon(x, y, 7, bitmap)
            }
            // These reprogram slots 1-5 regardless of the active mode,
            // overwriting any bar glyphs already on screen; matches the
            // module's observed behavior
            Icon::ArrowUp => self.put_glyph_icon(x, y, 1, &glyphs::ARROW_UP),
            Icon::ArrowDown => self.put_glyph_icon(x, y, 2, &glyphs::ARROW_DOWN),
            Icon::CheckboxOff => self.put_glyph_icon(x, y, 3, &glyphs::CHECKBOX_OFF),
            Icon::CheckboxOn => self.put_glyph_icon(x, y, 4, &glyphs::CHECKBOX_ON),
            Icon::CheckboxGray => self.put_glyph_icon(x, y, 5, &glyphs::CHECKBOX_GRAY),
            // Let the server core render the rest
            _ => IconOutcome::Unhandled,
        }
    }

    fn set_char(&mut self, slot: u8, bitmap: &GlyphBitmap) {
        self.program_glyph(slot, bitmap);
    }

    fn backlight(&mut self, on: bool) {
        debug!("ax93304: backlight {}", if on { "on" } else { "off" });
        self.send(if on {
            &cmd::BACKLIGHT_ON
        } else {
            &cmd::BACKLIGHT_OFF
        });
    }

    fn get_key(&mut self) -> Option<Key> {
        self.send(&cmd::POLL_KEY);

        match self.link.try_recv_byte() {
            Ok(Some(key::UP)) => Some(Key::Up),
            Ok(Some(key::DOWN)) => Some(Key::Down),
            Ok(Some(key::ESCAPE)) => Some(Key::Escape),
            Ok(Some(key::ENTER)) => Some(Key::Enter),
            Ok(Some(other)) => {
                debug!("ax93304: unmapped key byte {other:#04x}");
                None
            }
            Ok(None) => None,
            Err(err) => {
                warn!("ax93304: key read failed: {err}");
                None
            }
        }
    }
}
