//! `off` subcommand: turn a logical light off.

use super::{GlobalOpts, LightState, Result, open_lights};

pub(super) fn cmd_off(opts: &GlobalOpts, light: &str) -> Result<()> {
    let lights = open_lights(opts)?;
    lights.open(light)?.set(LightState::solid(0))?;
    println!("{light}: off");
    Ok(())
}
