//! Open/close surface for the five logical lights.
//!
//! [`Lights`] hands out [`Light`] handles by name; every handle shares one
//! [`LightControl`] implementation (in practice an [`Arbiter`]) behind an
//! `Arc`, so arbitration state survives handle churn.

use std::fmt;
use std::sync::Arc;

use crate::arbiter::{Arbiter, BacklightId, RgbSource};
use crate::error::{LightsError, Result};
use crate::state::LightState;
use crate::sysfs::Sysfs;

// ── Logical lights ──

/// The five logical lights this device exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalLight {
    Backlight,
    Buttons,
    Notifications,
    Attention,
    Battery,
}

impl LogicalLight {
    /// All logical lights, in presentation order.
    pub const ALL: [LogicalLight; 5] = [
        LogicalLight::Backlight,
        LogicalLight::Buttons,
        LogicalLight::Notifications,
        LogicalLight::Attention,
        LogicalLight::Battery,
    ];

    /// Canonical name used to open the light.
    pub fn name(&self) -> &'static str {
        match self {
            LogicalLight::Backlight => "backlight",
            LogicalLight::Buttons => "buttons",
            LogicalLight::Notifications => "notifications",
            LogicalLight::Attention => "attention",
            LogicalLight::Battery => "battery",
        }
    }

    /// Look up a light by its canonical name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<LogicalLight> {
        match name {
            "backlight" => Some(LogicalLight::Backlight),
            "buttons" => Some(LogicalLight::Buttons),
            "notifications" => Some(LogicalLight::Notifications),
            "attention" => Some(LogicalLight::Attention),
            "battery" => Some(LogicalLight::Battery),
            _ => None,
        }
    }
}

// ── Capability trait ──

/// The two setter shapes the hardware offers: plain channel brightness and
/// arbitrated color.
pub trait LightControl: Send + Sync {
    /// Drive a single-channel backlight from the state's color.
    fn set_backlight(&self, id: BacklightId, state: LightState) -> Result<()>;
    /// Store an RGB source state and re-arbitrate the shared LED.
    fn set_rgb(&self, source: RgbSource, state: LightState) -> Result<()>;
}

impl<S: Sysfs + Send + Sync> LightControl for Arbiter<S> {
    fn set_backlight(&self, id: BacklightId, state: LightState) -> Result<()> {
        Arbiter::set_backlight(self, id, state)
    }

    fn set_rgb(&self, source: RgbSource, state: LightState) -> Result<()> {
        Arbiter::set_rgb(self, source, state);
        Ok(())
    }
}

// ── Open surface ──

/// Factory for [`Light`] handles over one shared control implementation.
#[derive(Clone)]
pub struct Lights {
    ctl: Arc<dyn LightControl>,
}

impl Lights {
    pub fn new(ctl: Arc<dyn LightControl>) -> Self {
        Lights { ctl }
    }

    /// Open a logical light by name.
    ///
    /// Unknown names fail with [`LightsError::UnknownLight`] before any
    /// hardware access.
    pub fn open(&self, name: &str) -> Result<Light> {
        let id = LogicalLight::from_name(name)
            .ok_or_else(|| LightsError::UnknownLight(name.to_string()))?;
        Ok(Light {
            ctl: Arc::clone(&self.ctl),
            id,
        })
    }
}

/// An opened handle to one logical light.
///
/// Dropping the handle is the close: trivially idempotent, never touches
/// hardware. Retained arbitration state lives in the shared control and
/// outlives the handle.
pub struct Light {
    ctl: Arc<dyn LightControl>,
    id: LogicalLight,
}

impl fmt::Debug for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Light")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl Light {
    pub fn id(&self) -> LogicalLight {
        self.id
    }

    /// Push a new state to this light.
    pub fn set(&self, state: LightState) -> Result<()> {
        match self.id {
            LogicalLight::Backlight => self.ctl.set_backlight(BacklightId::Lcd, state),
            LogicalLight::Buttons => self.ctl.set_backlight(BacklightId::Buttons, state),
            LogicalLight::Notifications => self.ctl.set_rgb(RgbSource::Notification, state),
            LogicalLight::Attention => self.ctl.set_rgb(RgbSource::Attention, state),
            LogicalLight::Battery => self.ctl.set_rgb(RgbSource::Battery, state),
        }
    }
}
