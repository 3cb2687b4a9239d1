//! Display backend trait
//!
//! The contract between the display server and one hardware backend.
//! Coordinates are 1-based: the upper-left cell is `(1, 1)`, the
//! lower-right `(width(), height())`.
//!
//! Drawing calls have no error channel by design. The server treats the
//! display as best effort: a backend corrects or drops bad content, logs
//! a warning, and carries on rather than failing a frame.

use crate::glyph::GlyphBitmap;
use crate::icons::{Icon, IconOutcome};
use crate::input::Key;

/// A loaded display backend
pub trait DisplayDriver {
    /// Display width in character cells
    fn width(&self) -> u16;

    /// Display height in character cells
    fn height(&self) -> u16;

    /// Width of one character cell in pixels
    fn cell_width(&self) -> u16;

    /// Height of one character cell in pixels
    fn cell_height(&self) -> u16;

    /// Blank the framebuffer and release the programmable glyph slots
    fn clear(&mut self);

    /// Transmit the framebuffer to the device
    fn flush(&mut self);

    /// Write a string at `(x, y)`, truncating at the end of the
    /// framebuffer
    fn string(&mut self, x: u16, y: u16, text: &str);

    /// Write a single display byte at `(x, y)`
    fn chr(&mut self, x: u16, y: u16, c: u8);

    /// Draw a vertical bar growing up from `(x, y)`
    ///
    /// `len` cells represent 100%; `promille` is the current fill in
    /// parts per thousand. `options` is reserved and currently unused.
    fn vbar(&mut self, x: u16, y: u16, len: u16, promille: u16, options: u16);

    /// Draw a horizontal bar growing right from `(x, y)`
    fn hbar(&mut self, x: u16, y: u16, len: u16, promille: u16, options: u16);

    /// Place an icon at `(x, y)`
    fn icon(&mut self, x: u16, y: u16, icon: Icon) -> IconOutcome;

    /// Program a custom glyph slot with an 8-row bitmap
    fn set_char(&mut self, slot: u8, bitmap: &GlyphBitmap);

    /// Switch the backlight on or off
    fn backlight(&mut self, on: bool);

    /// Poll the device for a pressed key without blocking
    fn get_key(&mut self) -> Option<Key>;
}
