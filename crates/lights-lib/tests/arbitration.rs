//! Integration tests: arbitration scenarios through the public API.
//!
//! These tests exercise open → set → arbitrate through [`Lights`] handles
//! over a mock writer, asserting per-file write histories, plus end-to-end
//! passes over the real [`KernelSysfs`] against a scratch tree.

use std::path::Path;
use std::sync::Arc;

use lights_lib::arbiter::Arbiter;
use lights_lib::config::LedPaths;
use lights_lib::hal::{Lights, LogicalLight};
use lights_lib::state::LightState;
use lights_lib::sysfs::KernelSysfs;
use lights_lib::sysfs::mock::MockSysfs;

/// Helper: a Lights facade over a mock writer, keeping the engine visible.
fn mock_rig() -> (Lights, Arc<Arbiter<MockSysfs>>, LedPaths) {
    let paths = LedPaths::default();
    let arb = Arc::new(Arbiter::new(MockSysfs::new(), paths.clone()));
    (Lights::new(arb.clone()), arb, paths)
}

/// Helper: create every LED attribute file under a rebased tree.
fn create_led_files(paths: &LedPaths) {
    for path in [
        &paths.red,
        &paths.green,
        &paths.blue,
        &paths.red_blink,
        &paths.green_blink,
        &paths.blue_blink,
        &paths.lcd_backlight,
        &paths.button_backlight,
    ] {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "0\n").unwrap();
    }
}

/// Helper: first line of an attribute file, parsed as i32.
fn read_attr(path: &Path) -> i32 {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .next()
        .unwrap()
        .trim()
        .parse()
        .unwrap()
}

// ── Test: steady notification ──

#[test]
fn steady_notification_drives_red() {
    let (lights, arb, p) = mock_rig();
    let light = lights.open("notifications").unwrap();
    light.set(LightState::solid(0xFF0000)).unwrap();

    assert_eq!(arb.sysfs().value(&p.red), Some(255));
    assert_eq!(arb.sysfs().value(&p.green), Some(0));
    assert_eq!(arb.sysfs().value(&p.blue), Some(0));
    // blink files saw only the reset zero
    assert_eq!(arb.sysfs().values(&p.red_blink), vec![0]);
    assert_eq!(arb.sysfs().values(&p.green_blink), vec![0]);
    assert_eq!(arb.sysfs().values(&p.blue_blink), vec![0]);
}

// ── Test: blinking notification ──

#[test]
fn blinking_notification_writes_duration() {
    let (lights, arb, p) = mock_rig();
    lights
        .open("notifications")
        .unwrap()
        .set(LightState::blink(0x00FF00, 500, 500))
        .unwrap();

    assert_eq!(arb.sysfs().value(&p.green), Some(0));
    assert_eq!(
        arb.sysfs().values(&p.green_blink),
        vec![0, 500],
        "lit channel gets the flash-on duration after the reset zero"
    );
    assert_eq!(
        arb.sysfs().values(&p.red_blink),
        vec![0],
        "unlit channels keep the reset zero only"
    );
    assert_eq!(arb.sysfs().values(&p.blue_blink), vec![0]);
}

// ── Test: attention override and restore ──

#[test]
fn attention_overrides_then_restores_notification() {
    let (lights, arb, p) = mock_rig();
    let notifications = lights.open("notifications").unwrap();
    let attention = lights.open("attention").unwrap();

    notifications.set(LightState::solid(0xFF0000)).unwrap();
    attention.set(LightState::solid(0x0000FF)).unwrap();
    assert_eq!(arb.sysfs().value(&p.blue), Some(255));
    assert_eq!(arb.sysfs().value(&p.red), Some(0));

    // attention clears; the retained notification state wins again
    attention.set(LightState::solid(0)).unwrap();
    assert_eq!(arb.sysfs().value(&p.red), Some(255));
    assert_eq!(arb.sysfs().value(&p.blue), Some(0));
}

// ── Test: battery fallback ──

#[test]
fn all_sources_unlit_drives_battery_zeros() {
    let (lights, arb, p) = mock_rig();
    lights
        .open("battery")
        .unwrap()
        .set(LightState::solid(0))
        .unwrap();

    // reset zero plus the unconditional battery drive
    assert_eq!(arb.sysfs().values(&p.red), vec![0, 0]);
    assert_eq!(arb.sysfs().values(&p.green), vec![0, 0]);
    assert_eq!(arb.sysfs().values(&p.blue), vec![0, 0]);
    // the drive step never touches blink files for battery
    assert_eq!(arb.sysfs().values(&p.red_blink), vec![0]);
}

#[test]
fn battery_always_steady() {
    let (lights, arb, p) = mock_rig();
    lights
        .open("battery")
        .unwrap()
        .set(LightState::blink(0xFF8000, 500, 500))
        .unwrap();

    assert_eq!(arb.sysfs().value(&p.red), Some(255));
    assert_eq!(arb.sysfs().value(&p.green), Some(128));
    assert_eq!(arb.sysfs().values(&p.red_blink), vec![0]);
}

// ── Test: idempotence ──

#[test]
fn repeated_update_repeats_write_sequence() {
    let (lights, arb, _p) = mock_rig();
    let light = lights.open("attention").unwrap();

    light.set(LightState::blink(0xFFFF00, 250, 250)).unwrap();
    let first = arb.sysfs().writes();

    arb.sysfs().clear();
    light.set(LightState::blink(0xFFFF00, 250, 250)).unwrap();
    assert_eq!(arb.sysfs().writes(), first);
}

// ── Test: unknown light ──

#[test]
fn unknown_light_fails_before_any_write() {
    let (lights, arb, _p) = mock_rig();
    let err = lights.open("speaker").unwrap_err();
    assert_eq!(err.to_string(), "Unknown light: speaker");
    assert_eq!(arb.sysfs().write_count(), 0);
}

#[test]
fn all_five_lights_open() {
    let (lights, _arb, _p) = mock_rig();
    for light in LogicalLight::ALL {
        let handle = lights.open(light.name()).unwrap();
        assert_eq!(handle.id(), light);
    }
}

// ── Test: backlights through handles ──

#[test]
fn backlights_use_luma_brightness() {
    let (lights, arb, p) = mock_rig();
    lights
        .open("backlight")
        .unwrap()
        .set(LightState::solid(0x123456))
        .unwrap();
    lights
        .open("buttons")
        .unwrap()
        .set(LightState::solid(0x0000FF))
        .unwrap();

    assert_eq!(arb.sysfs().value(&p.lcd_backlight), Some(45));
    assert_eq!(arb.sysfs().value(&p.button_backlight), Some(28));
    assert!(arb.sysfs().values(&p.red).is_empty());
}

// ── Test: kernel writer end-to-end ──

#[test]
fn kernel_sysfs_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let paths = LedPaths::default().under_root(dir.path());
    create_led_files(&paths);

    let arb = Arc::new(Arbiter::new(KernelSysfs::new(), paths.clone()));
    let lights = Lights::new(arb);

    lights
        .open("notifications")
        .unwrap()
        .set(LightState::solid(0xFF0000))
        .unwrap();
    assert_eq!(read_attr(&paths.red), 255);
    assert_eq!(read_attr(&paths.green), 0);

    lights
        .open("attention")
        .unwrap()
        .set(LightState::blink(0x00FF00, 500, 1000))
        .unwrap();
    assert_eq!(read_attr(&paths.green), 0);
    assert_eq!(read_attr(&paths.green_blink), 500);
    assert_eq!(read_attr(&paths.red_blink), 0);

    lights
        .open("backlight")
        .unwrap()
        .set(LightState::solid(0xFFFFFF))
        .unwrap();
    assert_eq!(read_attr(&paths.lcd_backlight), 255);

    // attention cleared: the retained notification red wins again
    lights
        .open("attention")
        .unwrap()
        .set(LightState::solid(0))
        .unwrap();
    assert_eq!(read_attr(&paths.red), 255);
    assert_eq!(read_attr(&paths.green_blink), 0);

    // notification cleared too: every RGB output dark
    lights
        .open("notifications")
        .unwrap()
        .set(LightState::solid(0))
        .unwrap();
    for path in [
        &paths.red,
        &paths.green,
        &paths.blue,
        &paths.red_blink,
        &paths.green_blink,
        &paths.blue_blink,
    ] {
        assert_eq!(read_attr(path), 0, "expected {} to be dark", path.display());
    }
}

#[test]
fn kernel_missing_tree_swallows_rgb_but_fails_backlight() {
    let dir = tempfile::tempdir().unwrap();
    // no attribute files created under the root
    let paths = LedPaths::default().under_root(dir.path());
    let arb = Arc::new(Arbiter::new(KernelSysfs::new(), paths));
    let lights = Lights::new(arb);

    // arbitrated set still reports success
    lights
        .open("notifications")
        .unwrap()
        .set(LightState::solid(0xFF0000))
        .unwrap();

    // backlight set propagates the open failure
    let err = lights
        .open("backlight")
        .unwrap()
        .set(LightState::solid(0xFFFFFF))
        .unwrap_err();
    assert!(matches!(err, lights_lib::LightsError::Io(_)));
}
