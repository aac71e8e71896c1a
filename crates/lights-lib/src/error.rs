//! Unified error type for the lights-lib crate.
//!
//! [`LightsError`] covers the few ways this crate can fail: opening a light
//! by an unrecognized name, sysfs I/O on the paths that propagate errors,
//! and config/color parsing. `From<std::io::Error>` lets `?` lift write
//! failures out of the backlight path directly.

use std::fmt;

/// Unified error type for lights-lib operations.
#[derive(Debug)]
pub enum LightsError {
    /// Open was asked for a light name this device does not expose.
    UnknownLight(String),
    /// Standard I/O error (sysfs open/write, config read). Carries the
    /// platform error code where the OS supplied one.
    Io(std::io::Error),
    /// Configuration validation error.
    Config(String),
    /// Color parsing error.
    Color(String),
}

impl fmt::Display for LightsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightsError::UnknownLight(name) => write!(f, "Unknown light: {name}"),
            LightsError::Io(e) => write!(f, "I/O error: {e}"),
            LightsError::Config(e) => write!(f, "Config error: {e}"),
            LightsError::Color(e) => write!(f, "Color error: {e}"),
        }
    }
}

impl std::error::Error for LightsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LightsError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LightsError {
    fn from(e: std::io::Error) -> Self {
        LightsError::Io(e)
    }
}

/// Crate-level Result alias using [`LightsError`].
pub type Result<T> = std::result::Result<T, LightsError>;
