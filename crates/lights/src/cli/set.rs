//! `set` subcommand: drive a logical light with a color and flash timing.

use super::{GlobalOpts, LightState, Result, color, open_lights};

pub(super) fn cmd_set(
    opts: &GlobalOpts,
    light: &str,
    input: &str,
    on: Option<i32>,
    off: Option<i32>,
) -> Result<()> {
    let rgb = color::parse_color(input)?;
    let blinking = on.is_some() || off.is_some();
    let state = if blinking {
        LightState::blink(rgb, on.unwrap_or(0), off.unwrap_or(0))
    } else {
        LightState::solid(rgb)
    };

    let lights = open_lights(opts)?;
    lights.open(light)?.set(state)?;

    if blinking {
        println!(
            "{light}: {} blink {}ms on / {}ms off",
            color::format_color(rgb),
            state.flash_on_ms,
            state.flash_off_ms
        );
    } else {
        println!("{light}: {}", color::format_color(rgb));
    }
    Ok(())
}
