//! RGB source arbitration and hardware drive.
//!
//! Three logical sources share one tri-color LED: attention, notifications
//! and battery, in that priority order. The engine retains the most recent
//! state for each source and re-derives the hardware state from scratch on
//! every update, so a losing source wins later without being re-sent.

use std::path::Path;
use std::sync::Mutex;

use crate::color;
use crate::config::LedPaths;
use crate::error::Result;
use crate::state::LightState;
use crate::sysfs::Sysfs;

// ── Sources ──

/// Logical sources contending for the shared RGB LED, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbSource {
    Attention,
    Notification,
    Battery,
}

/// The two single-channel backlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacklightId {
    Lcd,
    Buttons,
}

/// Retained per-source states. Slots start unlit and are only ever
/// overwritten, never removed.
#[derive(Debug, Default, Clone, Copy)]
struct Slots {
    attention: LightState,
    notification: LightState,
    battery: LightState,
}

impl Slots {
    fn slot_mut(&mut self, source: RgbSource) -> &mut LightState {
        match source {
            RgbSource::Attention => &mut self.attention,
            RgbSource::Notification => &mut self.notification,
            RgbSource::Battery => &mut self.battery,
        }
    }
}

// ── Engine ──

/// Arbitration engine over one writer and one set of paths.
///
/// A single mutex serializes every hardware write, backlights included, so
/// interleaved updates never leave the LED bank half-written.
pub struct Arbiter<S: Sysfs> {
    sysfs: S,
    paths: LedPaths,
    slots: Mutex<Slots>,
}

impl<S: Sysfs> Arbiter<S> {
    pub fn new(sysfs: S, paths: LedPaths) -> Self {
        Arbiter {
            sysfs,
            paths,
            slots: Mutex::new(Slots::default()),
        }
    }

    /// The underlying writer, for tests that inspect traffic.
    pub fn sysfs(&self) -> &S {
        &self.sysfs
    }

    /// Store `state` for `source` and re-arbitrate the RGB LED.
    ///
    /// Infallible by contract: write errors during arbitration are logged
    /// at debug level and swallowed, and the stored state advances
    /// regardless.
    pub fn set_rgb(&self, source: RgbSource, state: LightState) {
        let Ok(mut slots) = self.slots.lock() else {
            log::warn!("light state lock poisoned, dropping {source:?} update");
            return;
        };
        *slots.slot_mut(source) = state;
        self.apply(&slots);
    }

    /// Drive one backlight with the luma brightness of `state`'s color.
    ///
    /// Unlike the RGB path, write errors propagate to the caller.
    pub fn set_backlight(&self, id: BacklightId, state: LightState) -> Result<()> {
        let brightness = i32::from(state.brightness());
        let path = match id {
            BacklightId::Lcd => &self.paths.lcd_backlight,
            BacklightId::Buttons => &self.paths.button_backlight,
        };
        let _guard = self
            .slots
            .lock()
            .map_err(|_| std::io::Error::other("light state lock poisoned"))?;
        self.sysfs.write_int(path, brightness)?;
        Ok(())
    }

    /// Re-derive the hardware state from the slots. Caller holds the lock.
    fn apply(&self, slots: &Slots) {
        // Ordering matters: every pass starts dark, then exactly one source
        // drives. Battery is the fallback even when unlit.
        self.reset_rgb();
        if slots.attention.is_lit() {
            self.drive(&slots.attention);
        } else if slots.notification.is_lit() {
            self.drive(&slots.notification);
        } else {
            self.drive_solid(&slots.battery);
        }
    }

    /// Zero all six RGB outputs: brightness files first, then blink files.
    fn reset_rgb(&self) {
        self.write(&self.paths.red, 0);
        self.write(&self.paths.green, 0);
        self.write(&self.paths.blue, 0);
        self.write(&self.paths.red_blink, 0);
        self.write(&self.paths.green_blink, 0);
        self.write(&self.paths.blue_blink, 0);
    }

    /// Drive the winning attention/notification state, blinking or steady.
    fn drive(&self, state: &LightState) {
        // A flash-on of exactly 1 means steady on; any other value, zero
        // included, selects the hardware blink cycle. The flash-mode tag
        // is not consulted.
        let blink = state.flash_on_ms != 1;
        let (red, green, blue) = color::split_rgb(state.color);
        log::debug!(
            "rgb drive mode={:?} color={:#010X} red={red} green={green} blue={blue} on={} off={}",
            state.flash_mode,
            state.color,
            state.flash_on_ms,
            state.flash_off_ms
        );
        if blink {
            self.write(&self.paths.red, 0);
            self.write(&self.paths.green, 0);
            self.write(&self.paths.blue, 0);
            // Only lit channels get the blink duration; the reset already
            // cleared the rest.
            if red != 0 {
                self.write(&self.paths.red_blink, state.flash_on_ms);
            }
            if green != 0 {
                self.write(&self.paths.green_blink, state.flash_on_ms);
            }
            if blue != 0 {
                self.write(&self.paths.blue_blink, state.flash_on_ms);
            }
        } else {
            self.write(&self.paths.red, i32::from(red));
            self.write(&self.paths.green, i32::from(green));
            self.write(&self.paths.blue, i32::from(blue));
        }
    }

    /// Drive the battery state: always steady, blink files untouched.
    fn drive_solid(&self, state: &LightState) {
        let (red, green, blue) = color::split_rgb(state.color);
        self.write(&self.paths.red, i32::from(red));
        self.write(&self.paths.green, i32::from(green));
        self.write(&self.paths.blue, i32::from(blue));
    }

    fn write(&self, path: &Path, value: i32) {
        if let Err(e) = self.sysfs.write_int(path, value) {
            log::debug!("write {} failed: {e}", path.display());
        }
    }
}
