//! Glyph bitmaps programmed into the module's CGRAM
//!
//! Each bitmap is 8 rows, top first, with the 5 significant bits in the
//! low end of every row byte.

use charlcd_core::glyph::GlyphBitmap;

/// Vertical-bar glyph set for slots 1-7; index `i` has `i + 1` rows
/// filled from the bottom
pub const VBAR_UP: [GlyphBitmap; 7] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x1F],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x1F, 0x1F],
    [0x00, 0x00, 0x00, 0x00, 0x1F, 0x1F, 0x1F, 0x1F],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F],
    [0x00, 0x00, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F],
    [0x00, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F],
];

/// Horizontal-bar glyph set for slots 1-4; index `i` has `i + 1` columns
/// filled from the left
pub const HBAR_RIGHT: [GlyphBitmap; 4] = [
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10],
    [0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18],
    [0x1C, 0x1C, 0x1C, 0x1C, 0x1C, 0x1C, 0x1C, 0x1C],
    [0x1E, 0x1E, 0x1E, 0x1E, 0x1E, 0x1E, 0x1E, 0x1E],
];

pub const HEART_OPEN: GlyphBitmap = [0x1F, 0x15, 0x00, 0x00, 0x00, 0x11, 0x1B, 0x1F];

pub const HEART_FILLED: GlyphBitmap = [0x1F, 0x15, 0x0A, 0x0E, 0x0E, 0x15, 0x1B, 0x1F];

pub const ARROW_UP: GlyphBitmap = [0x04, 0x0E, 0x15, 0x04, 0x04, 0x04, 0x04, 0x00];

pub const ARROW_DOWN: GlyphBitmap = [0x04, 0x04, 0x04, 0x04, 0x15, 0x0E, 0x04, 0x00];

pub const CHECKBOX_OFF: GlyphBitmap = [0x00, 0x00, 0x1F, 0x11, 0x11, 0x11, 0x1F, 0x00];

pub const CHECKBOX_ON: GlyphBitmap = [0x04, 0x04, 0x1D, 0x16, 0x15, 0x11, 0x1F, 0x00];

pub const CHECKBOX_GRAY: GlyphBitmap = [0x00, 0x00, 0x1F, 0x15, 0x1B, 0x15, 0x1F, 0x00];
