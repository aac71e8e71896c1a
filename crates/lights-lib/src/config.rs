//! Sysfs path configuration. TOML-based, platform-aware discovery.
//!
//! The defaults match the stock driver layout below `/sys/class/leds`. A
//! config file may override any subset of the paths; `--sysfs-root` style
//! rebasing is handled by [`LedPaths::under_root`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Red channel brightness attribute.
pub const RED_LED_FILE: &str = "/sys/class/leds/led:rgb_red/brightness";
/// Green channel brightness attribute.
pub const GREEN_LED_FILE: &str = "/sys/class/leds/led:rgb_green/brightness";
/// Blue channel brightness attribute.
pub const BLUE_LED_FILE: &str = "/sys/class/leds/led:rgb_blue/brightness";
/// Red channel blink-control attribute.
pub const RED_BLINK_FILE: &str = "/sys/class/leds/led:rgb_red/rgbbreath";
/// Green channel blink-control attribute.
pub const GREEN_BLINK_FILE: &str = "/sys/class/leds/led:rgb_green/rgbbreath";
/// Blue channel blink-control attribute.
pub const BLUE_BLINK_FILE: &str = "/sys/class/leds/led:rgb_blue/rgbbreath";
/// LCD backlight brightness attribute.
pub const LCD_FILE: &str = "/sys/class/leds/lcd-backlight/brightness";
/// Button backlight brightness attribute.
pub const BUTTONS_FILE: &str = "/sys/class/leds/button-backlight/brightness";

/// The sysfs attribute files the control layer writes to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedPaths {
    /// Red channel brightness file.
    #[serde(default = "default_red")]
    pub red: PathBuf,

    /// Green channel brightness file.
    #[serde(default = "default_green")]
    pub green: PathBuf,

    /// Blue channel brightness file.
    #[serde(default = "default_blue")]
    pub blue: PathBuf,

    /// Red channel blink-control file.
    #[serde(default = "default_red_blink")]
    pub red_blink: PathBuf,

    /// Green channel blink-control file.
    #[serde(default = "default_green_blink")]
    pub green_blink: PathBuf,

    /// Blue channel blink-control file.
    #[serde(default = "default_blue_blink")]
    pub blue_blink: PathBuf,

    /// LCD backlight brightness file.
    #[serde(default = "default_lcd_backlight")]
    pub lcd_backlight: PathBuf,

    /// Button backlight brightness file.
    #[serde(default = "default_button_backlight")]
    pub button_backlight: PathBuf,
}

fn default_red() -> PathBuf {
    RED_LED_FILE.into()
}
fn default_green() -> PathBuf {
    GREEN_LED_FILE.into()
}
fn default_blue() -> PathBuf {
    BLUE_LED_FILE.into()
}
fn default_red_blink() -> PathBuf {
    RED_BLINK_FILE.into()
}
fn default_green_blink() -> PathBuf {
    GREEN_BLINK_FILE.into()
}
fn default_blue_blink() -> PathBuf {
    BLUE_BLINK_FILE.into()
}
fn default_lcd_backlight() -> PathBuf {
    LCD_FILE.into()
}
fn default_button_backlight() -> PathBuf {
    BUTTONS_FILE.into()
}

impl Default for LedPaths {
    fn default() -> Self {
        LedPaths {
            red: default_red(),
            green: default_green(),
            blue: default_blue(),
            red_blink: default_red_blink(),
            green_blink: default_green_blink(),
            blue_blink: default_blue_blink(),
            lcd_backlight: default_lcd_backlight(),
            button_backlight: default_button_backlight(),
        }
    }
}

impl LedPaths {
    /// Platform-specific config directory.
    pub fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lightsctl"))
    }

    /// Full path to the config file.
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join("config.toml"))
    }

    /// Load from the default path, logging any parse warnings.
    pub fn load() -> Self {
        let (paths, warnings) = Self::load_with_warnings();
        for w in &warnings {
            log::warn!("{w}");
        }
        paths
    }

    /// Load from the default path, returning the paths and any parse warnings.
    pub fn load_with_warnings() -> (Self, Vec<String>) {
        let Some(path) = Self::path() else {
            return (Self::default(), vec![]);
        };
        Self::load_from(&path)
    }

    /// Load from an arbitrary path, returning the paths and any parse warnings.
    ///
    /// Returns `(defaults, [])` if the file doesn't exist.
    /// Returns `(defaults, [warning])` if the file exists but can't be parsed.
    pub fn load_from(path: &Path) -> (Self, Vec<String>) {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(paths) => (paths, vec![]),
                Err(e) => {
                    let warning = format!(
                        "config parse error ({}), using defaults: {e}",
                        path.display()
                    );
                    (Self::default(), vec![warning])
                }
            },
            Err(_) => (Self::default(), vec![]),
        }
    }

    /// Check the path table for layouts the control layer cannot drive.
    ///
    /// All eight paths must be non-empty and pairwise distinct; two
    /// channels sharing one attribute file would corrupt the write
    /// sequences.
    pub fn validate(&self) -> crate::error::Result<()> {
        let all = [
            ("red", &self.red),
            ("green", &self.green),
            ("blue", &self.blue),
            ("red_blink", &self.red_blink),
            ("green_blink", &self.green_blink),
            ("blue_blink", &self.blue_blink),
            ("lcd_backlight", &self.lcd_backlight),
            ("button_backlight", &self.button_backlight),
        ];
        for (name, path) in &all {
            if path.as_os_str().is_empty() {
                return Err(crate::LightsError::Config(format!("{name} path is empty")));
            }
        }
        for (i, (name_a, path_a)) in all.iter().enumerate() {
            for (name_b, path_b) in &all[i + 1..] {
                if path_a == path_b {
                    return Err(crate::LightsError::Config(format!(
                        "{name_a} and {name_b} share the same file: {}",
                        path_a.display()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Rebase every path under `root`.
    ///
    /// Absolute paths lose their leading `/` first, so the stock
    /// `/sys/class/leds/...` tree lands at `<root>/sys/class/leds/...`.
    /// Lets the whole stack run against a scratch directory.
    pub fn under_root(&self, root: &Path) -> Self {
        let rebase = |p: &PathBuf| root.join(p.strip_prefix("/").unwrap_or(p));
        LedPaths {
            red: rebase(&self.red),
            green: rebase(&self.green),
            blue: rebase(&self.blue),
            red_blink: rebase(&self.red_blink),
            green_blink: rebase(&self.green_blink),
            blue_blink: rebase(&self.blue_blink),
            lcd_backlight: rebase(&self.lcd_backlight),
            button_backlight: rebase(&self.button_backlight),
        }
    }
}
