//! Driver configuration
//!
//! Read once when the backend is loaded.

use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Serial device the module is attached to
pub const DEFAULT_DEVICE: &str = "/dev/lcd";

/// Default link speed in bits per second
pub const DEFAULT_SPEED: u32 = 9600;

/// AX93304 backend configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Path of the serial device
    pub device: String,
    /// Link speed in bits per second; one of 1200, 2400, 9600 or 19200
    pub speed: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device: DEFAULT_DEVICE.to_owned(),
            speed: DEFAULT_SPEED,
        }
    }
}

impl Config {
    /// The configured speed, or 9600 with a warning if the module does
    /// not support it
    pub fn speed_or_default(&self) -> u32 {
        match self.speed {
            1200 | 2400 | 9600 | 19200 => self.speed,
            other => {
                warn!(
                    "ax93304: illegal Speed {other}; must be one of 1200, 2400, 9600 or 19200; \
                     using {DEFAULT_SPEED}"
                );
                DEFAULT_SPEED
            }
        }
    }
}
