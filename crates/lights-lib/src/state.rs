//! Requested state of a logical light.
//!
//! A [`LightState`] is what a caller hands to the control layer: a packed
//! color plus flash timing, mirroring the framework's light-state tuple.
//! The flash-mode tag travels along for logging, but the hardware layer
//! keys blinking off the flash-on sentinel (see [`crate::arbiter`]), not
//! the tag.

use crate::color;

/// Flash behavior requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashMode {
    /// Steady output, no blinking requested.
    #[default]
    None,
    /// Timed blink with flash-on/flash-off durations.
    Timed,
}

/// One requested light state: color plus flash timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LightState {
    /// Packed `0xAARRGGBB` color; alpha ignored.
    pub color: u32,
    /// Requested flash behavior tag.
    pub flash_mode: FlashMode,
    /// Flash-on duration in ms. Exactly 1 means steady on.
    pub flash_on_ms: i32,
    /// Flash-off duration in ms.
    pub flash_off_ms: i32,
}

impl LightState {
    /// Steady color. Sets the flash-on sentinel to 1 ("always on").
    pub fn solid(color: u32) -> Self {
        LightState {
            color,
            flash_mode: FlashMode::None,
            flash_on_ms: 1,
            flash_off_ms: 0,
        }
    }

    /// Timed blink between `color` and off.
    pub fn blink(color: u32, on_ms: i32, off_ms: i32) -> Self {
        LightState {
            color,
            flash_mode: FlashMode::Timed,
            flash_on_ms: on_ms,
            flash_off_ms: off_ms,
        }
    }

    /// Whether any RGB channel is non-zero. Alpha alone does not light.
    pub fn is_lit(&self) -> bool {
        self.color & color::RGB_MASK != 0
    }

    /// Luma-weighted single-channel brightness of this state's color.
    pub fn brightness(&self) -> u8 {
        color::rgb_to_brightness(self.color)
    }
}
