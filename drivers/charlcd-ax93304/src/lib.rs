//! AX93304 16x2 serial LCD backend
//!
//! Driver for the Axiomtek AX93304 LCD module, a 16x2 character panel
//! with four front-panel buttons behind an RS-232-like link. The module
//! firmware accepts fixed command byte sequences (no handshake, no flow
//! control), so the driver keeps an in-memory framebuffer and rewrites
//! the whole panel on every flush.
//!
//! The device logic is generic over a [`transport::Transport`], so it can
//! run against an in-memory link in tests and a real serial port in
//! production:
//!
//! ```no_run
//! use charlcd_ax93304::{Ax93304, Config};
//! use charlcd_core::DisplayDriver;
//!
//! let mut lcd = Ax93304::open(&Config::default())?;
//! lcd.string(1, 1, "HELLO");
//! lcd.flush();
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod config;
pub mod driver;
pub mod glyphs;
pub mod transport;

pub use config::Config;
pub use driver::Ax93304;
pub use transport::{SerialPort, Transport};
