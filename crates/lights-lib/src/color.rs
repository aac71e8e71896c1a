//! Color math for the RGB LED bank.
//!
//! Colors arrive framework-packed as `0xAARRGGBB`. The alpha byte is
//! carried but ignored everywhere: channel extraction, brightness and
//! lit-ness all operate on the low 24 bits only.

/// Mask selecting the RGB payload of a packed `0xAARRGGBB` color.
pub const RGB_MASK: u32 = 0x00FF_FFFF;

/// Extract the red, green and blue channels from a packed color.
pub fn split_rgb(color: u32) -> (u8, u8, u8) {
    let r = ((color >> 16) & 0xFF) as u8;
    let g = ((color >> 8) & 0xFF) as u8;
    let b = (color & 0xFF) as u8;
    (r, g, b)
}

/// Collapse a packed color to a single luma-weighted brightness.
///
/// Weights are the driver's fixed-point approximation of Rec. 601
/// (`77R + 150G + 29B`, divided by 256). Full white maps to exactly 255.
pub fn rgb_to_brightness(color: u32) -> u8 {
    let (r, g, b) = split_rgb(color);
    ((77 * u32::from(r) + 150 * u32::from(g) + 29 * u32::from(b)) >> 8) as u8
}

/// Parse a color string into the packed `0x00RRGGBB` form.
///
/// Accepts:
/// - Hex: `"#FF0000"`, `"FF0000"`, `"#ff0000"`
/// - Named: `"red"`, `"green"`, `"blue"`, `"white"`, `"orange"`, `"yellow"`, `"purple"`, `"cyan"`
pub fn parse_color(s: &str) -> crate::error::Result<u32> {
    let s = s.trim();

    // Named colors
    match s.to_lowercase().as_str() {
        "red" => return Ok(0xFF0000),
        "green" => return Ok(0x00FF00),
        "blue" => return Ok(0x0000FF),
        "white" => return Ok(0xFFFFFF),
        "orange" => return Ok(0xFF8000),
        "yellow" => return Ok(0xFFFF00),
        "purple" => return Ok(0x8000FF),
        "cyan" => return Ok(0x00FFFF),
        "off" | "black" => return Ok(0x000000),
        _ => {}
    }

    // Hex color
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 {
        return Err(crate::LightsError::Color(format!(
            "Invalid color: {s} (use #RRGGBB or a color name)"
        )));
    }
    u32::from_str_radix(hex, 16)
        .map_err(|_| crate::LightsError::Color(format!("Invalid hex color: {s}")))
}

/// Format the RGB payload of a packed color as `#RRGGBB`.
pub fn format_color(color: u32) -> String {
    let (r, g, b) = split_rgb(color);
    format!("#{r:02X}{g:02X}{b:02X}")
}
