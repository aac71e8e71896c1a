//! CLI subcommands: light control and inventory.

mod list;
mod off;
mod set;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Subcommand;
use serde::Serialize;

pub(super) use lights_lib::arbiter::Arbiter;
pub(super) use lights_lib::color;
pub(super) use lights_lib::config::LedPaths;
pub(super) use lights_lib::error::Result;
pub(super) use lights_lib::hal::{Lights, LogicalLight};
pub(super) use lights_lib::state::LightState;
pub(super) use lights_lib::sysfs::KernelSysfs;

/// Global options shared by every subcommand.
pub struct GlobalOpts {
    pub json: bool,
    pub config: Option<PathBuf>,
    pub sysfs_root: Option<PathBuf>,
}

/// Resolve the LED path table from config and the optional test root.
pub(super) fn resolve_paths(opts: &GlobalOpts) -> LedPaths {
    let paths = match &opts.config {
        Some(file) => {
            let (paths, warnings) = LedPaths::load_from(file);
            for w in &warnings {
                log::warn!("{w}");
            }
            paths
        }
        None => LedPaths::load(),
    };
    match &opts.sysfs_root {
        Some(root) => paths.under_root(root),
        None => paths,
    }
}

/// Build the light facade over the kernel writer.
///
/// Fails if the resolved path table is not drivable (empty or shared
/// attribute files).
pub(super) fn open_lights(opts: &GlobalOpts) -> Result<Lights> {
    let paths = resolve_paths(opts);
    paths.validate()?;
    Ok(Lights::new(Arc::new(Arbiter::new(KernelSysfs::new(), paths))))
}

// ── JSON output structs ──

#[derive(Serialize)]
pub(super) struct ListOutput {
    pub count: usize,
    pub lights: Vec<LightEntry>,
}

#[derive(Serialize)]
pub(super) struct LightEntry {
    pub name: String,
    pub kind: String,
    pub paths: Vec<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Set a light to a color, optionally blinking
    Set {
        /// Logical light name (backlight, buttons, notifications, attention, battery)
        light: String,
        /// Color as #RRGGBB hex or a color name (red, green, ...)
        color: String,
        /// Flash on duration in milliseconds (requests blinking)
        #[arg(long, value_name = "MS")]
        on: Option<i32>,
        /// Flash off duration in milliseconds
        #[arg(long, value_name = "MS")]
        off: Option<i32>,
    },

    /// Turn a light off
    Off {
        /// Logical light name
        light: String,
    },

    /// List logical lights and the sysfs files they drive
    List,
}

/// Warn if `--json` was passed to a command that doesn't support it.
fn warn_json_unsupported(cmd_name: &str) {
    log::warn!("--json is not supported for `{cmd_name}` (ignored)");
}

pub fn run(cmd: Command, opts: &GlobalOpts) -> Result<()> {
    match cmd {
        Command::Set {
            light,
            color,
            on,
            off,
        } => {
            if opts.json {
                warn_json_unsupported("set");
            }
            set::cmd_set(opts, &light, &color, on, off)
        }
        Command::Off { light } => {
            if opts.json {
                warn_json_unsupported("off");
            }
            off::cmd_off(opts, &light)
        }
        Command::List => list::cmd_list(opts),
    }
}
