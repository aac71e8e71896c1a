//! Sysfs RGB LED and backlight control with source arbitration.

pub mod arbiter;
pub mod color;
pub mod config;
pub mod error;
pub mod hal;
pub mod state;
pub mod sysfs;

pub use error::LightsError;
