use super::*;

// =============================================================
// parse_hex_rgb
// =============================================================

#[test]
fn parses_six_digit_hex() {
    assert_eq!(parse_hex_rgb("#00ff88"), Some((0x00, 0xff, 0x88)));
    assert_eq!(parse_hex_rgb("#FF9900"), Some((0xff, 0x99, 0x00)));
}

#[test]
fn parses_three_digit_hex() {
    assert_eq!(parse_hex_rgb("#fa0"), Some((0xff, 0xaa, 0x00)));
}

#[test]
fn parses_with_surrounding_whitespace() {
    assert_eq!(parse_hex_rgb("  #102030 "), Some((0x10, 0x20, 0x30)));
}

#[test]
fn rejects_malformed_values() {
    assert_eq!(parse_hex_rgb("00ff88"), None);
    assert_eq!(parse_hex_rgb("#00ff8"), None);
    assert_eq!(parse_hex_rgb("#zzzzzz"), None);
    assert_eq!(parse_hex_rgb(""), None);
}

#[test]
fn normalize_lowercases_and_falls_back() {
    assert_eq!(normalize_hex_color("#FF9900", (0, 0, 0)), "#ff9900");
    assert_eq!(normalize_hex_color("garbage", (0x00, 0xff, 0x88)), "#00ff88");
}

// =============================================================
// hue_from_position
// =============================================================

#[test]
fn hue_sweeps_canvas_width() {
    assert_eq!(hue_from_position(0.0, 1000.0), 0.0);
    assert_eq!(hue_from_position(100.0, 1000.0), 36.0);
    assert_eq!(hue_from_position(500.0, 1000.0), 180.0);
    assert_eq!(hue_from_position(1000.0, 1000.0), 360.0);
}

#[test]
fn hue_of_degenerate_width_is_zero() {
    assert_eq!(hue_from_position(100.0, 0.0), 0.0);
}

// =============================================================
// hsl_to_hex
// =============================================================

#[test]
fn primary_hues() {
    assert_eq!(hsl_to_hex(0.0, 1.0, 0.5), "#ff0000");
    assert_eq!(hsl_to_hex(120.0, 1.0, 0.5), "#00ff00");
    assert_eq!(hsl_to_hex(240.0, 1.0, 0.5), "#0000ff");
}

#[test]
fn secondary_hues() {
    assert_eq!(hsl_to_hex(60.0, 1.0, 0.5), "#ffff00");
    assert_eq!(hsl_to_hex(180.0, 1.0, 0.5), "#00ffff");
    assert_eq!(hsl_to_hex(300.0, 1.0, 0.5), "#ff00ff");
}

#[test]
fn palette_pick_at_one_tenth_width() {
    // x=100 on a 1000-wide canvas → 36° at full saturation, half lightness
    let hue = hue_from_position(100.0, 1000.0);
    assert_eq!(hsl_to_hex(hue, 1.0, 0.5), "#ff9900");
}

#[test]
fn lightness_extremes() {
    assert_eq!(hsl_to_hex(36.0, 1.0, 0.0), "#000000");
    assert_eq!(hsl_to_hex(36.0, 1.0, 1.0), "#ffffff");
}

#[test]
fn hue_wraps_past_full_circle() {
    assert_eq!(hsl_to_hex(396.0, 1.0, 0.5), hsl_to_hex(36.0, 1.0, 0.5));
}

#[test]
fn zero_saturation_is_gray() {
    assert_eq!(hsl_to_hex(200.0, 0.0, 0.5), "#808080");
}
