//! `list` subcommand: show logical lights and the sysfs files they drive.

use super::{GlobalOpts, LedPaths, LightEntry, ListOutput, LogicalLight, Result, resolve_paths};

fn kind(light: LogicalLight) -> &'static str {
    match light {
        LogicalLight::Backlight | LogicalLight::Buttons => "single channel",
        LogicalLight::Notifications | LogicalLight::Attention | LogicalLight::Battery => {
            "arbitrated rgb"
        }
    }
}

fn entry_paths(light: LogicalLight, paths: &LedPaths) -> Vec<String> {
    let files: Vec<&std::path::PathBuf> = match light {
        LogicalLight::Backlight => vec![&paths.lcd_backlight],
        LogicalLight::Buttons => vec![&paths.button_backlight],
        LogicalLight::Notifications | LogicalLight::Attention | LogicalLight::Battery => vec![
            &paths.red,
            &paths.green,
            &paths.blue,
            &paths.red_blink,
            &paths.green_blink,
            &paths.blue_blink,
        ],
    };
    files.into_iter().map(|p| p.display().to_string()).collect()
}

pub(super) fn cmd_list(opts: &GlobalOpts) -> Result<()> {
    let paths = resolve_paths(opts);

    let entries: Vec<LightEntry> = LogicalLight::ALL
        .into_iter()
        .map(|light| LightEntry {
            name: light.name().to_string(),
            kind: kind(light).to_string(),
            paths: entry_paths(light, &paths),
        })
        .collect();

    if opts.json {
        let output = ListOutput {
            count: entries.len(),
            lights: entries,
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return Ok(());
    }

    for entry in &entries {
        println!("{} ({})", entry.name, entry.kind);
        for path in &entry.paths {
            println!("  {path}");
        }
    }
    Ok(())
}
