//! Device-independent core for character-LCD display drivers
//!
//! This crate contains the logic shared by all charlcd display backends:
//!
//! - Character-cell framebuffer with bounds-checked writes
//! - Render-mode rules for the programmable glyph slots
//! - Shared bar-drawing primitives (promille to cell/glyph conversion)
//! - The `DisplayDriver` trait that backends implement for the server
//! - Icon and key vocabularies of the server protocol

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bars;
pub mod framebuffer;
pub mod glyph;
pub mod icons;
pub mod input;
pub mod mode;
pub mod traits;

// Re-export key types
pub use framebuffer::Framebuffer;
pub use glyph::{GlyphBitmap, GLYPH_ROWS, GLYPH_SLOTS};
pub use icons::{Icon, IconOutcome};
pub use input::Key;
pub use mode::{ModeTransition, RenderMode};
pub use traits::DisplayDriver;
