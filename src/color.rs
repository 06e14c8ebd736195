//! Color helpers: hex parsing, HSL conversion, and the palette sweep.
//!
//! The three-finger gesture picks a color by horizontal position: the cursor
//! sweeps the full hue circle across the canvas width at full saturation and
//! half lightness.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// An opaque RGB color.
pub type Rgb = (u8, u8, u8);

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<Rgb> {
    let trimmed = raw.trim();
    let hex = trimmed.strip_prefix('#')?;
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Normalize a color to canonical lowercase `#rrggbb`, falling back when unparseable.
#[must_use]
pub fn normalize_hex_color(value: &str, fallback: Rgb) -> String {
    let (r, g, b) = parse_hex_rgb(value).unwrap_or(fallback);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Map a horizontal canvas position to a palette hue in degrees.
#[must_use]
pub fn hue_from_position(x: f64, canvas_width: f64) -> f64 {
    if canvas_width <= 0.0 {
        return 0.0;
    }
    (x / canvas_width) * 360.0
}

/// Convert HSL (hue in degrees, saturation and lightness in [0, 1]) to
/// lowercase `#rrggbb`.
#[must_use]
pub fn hsl_to_hex(hue_deg: f64, saturation: f64, lightness: f64) -> String {
    let h = hue_deg.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h {
        h if h < 1.0 => (c, x, 0.0),
        h if h < 2.0 => (x, c, 0.0),
        h if h < 3.0 => (0.0, c, x),
        h if h < 4.0 => (0.0, x, c),
        h if h < 5.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    format!("#{:02x}{:02x}{:02x}", channel(r + m), channel(g + m), channel(b + m))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
