//! Programmable glyph (CGRAM) dimensions
//!
//! Character-cell modules in this family expose 8 rewritable glyph slots,
//! each an 8-row bitmap with the significant bits in the low end of every
//! row byte.

/// Rows in one programmable glyph bitmap
pub const GLYPH_ROWS: usize = 8;

/// Number of programmable glyph slots (0-7)
pub const GLYPH_SLOTS: u8 = 8;

/// One glyph bitmap, top row first
pub type GlyphBitmap = [u8; GLYPH_ROWS];
