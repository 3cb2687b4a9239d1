//! Traits implemented by display backends

mod display;

pub use display::DisplayDriver;
