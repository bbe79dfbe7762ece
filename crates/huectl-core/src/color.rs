//! Color conversion between the bridge's native representations and
//! display colors.
//!
//! The bridge speaks CIE 1931 xy chromaticity plus a brightness percent,
//! and mired (mirek) color temperature. Display colors are `#rrggbb`
//! sRGB. Conversions use the Wide RGB D65 matrices from the Hue
//! developer documentation; the round trip is lossy by design but
//! monotonic and bounded.

use thiserror::Error;

/// Brightness floor. Zero percent is not a brightness -- it is `on: false` --
/// so setters clamp to 1 at the low end.
pub const BRIGHTNESS_MIN: f64 = 1.0;
pub const BRIGHTNESS_MAX: f64 = 100.0;

/// Bridge-supported mirek range.
pub const MIREK_MIN: u16 = 153;
pub const MIREK_MAX: u16 = 500;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexColorError {
    #[error("expected '#rrggbb' or 'rrggbb', got '{0}'")]
    Format(String),
}

// ── Clamping ─────────────────────────────────────────────────────────

/// Clamp a brightness percentage to `[1, 100]`. Silent: out-of-range
/// input snaps to the nearest valid value, it never errors.
pub fn clamp_brightness(pct: f64) -> f64 {
    pct.clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX)
}

/// Clamp a mirek value to the bridge-supported `[153, 500]`.
pub fn clamp_mirek(mirek: u16) -> u16 {
    mirek.clamp(MIREK_MIN, MIREK_MAX)
}

// ── Color temperature ────────────────────────────────────────────────

/// Mirek is reciprocal color temperature: 1,000,000 / K.
pub fn mirek_to_kelvin(mirek: u16) -> u32 {
    1_000_000 / u32::from(mirek.max(1))
}

/// Kelvin to mirek, rounded. Not clamped -- callers clamp before
/// transmission via [`clamp_mirek`].
pub fn kelvin_to_mirek(kelvin: u32) -> u16 {
    u16::try_from(1_000_000 / kelvin.max(1)).unwrap_or(u16::MAX)
}

// ── xy chromaticity <-> hex sRGB ─────────────────────────────────────

/// Convert xy chromaticity + brightness percent to a `#rrggbb` string.
pub fn xy_to_hex(x: f64, y: f64, brightness_pct: f64) -> String {
    let (r, g, b) = xy_to_rgb(x, y, brightness_pct);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Convert a `#rrggbb` display color to xy chromaticity + brightness
/// percent, the inverse of [`xy_to_hex`] within tolerance.
pub fn hex_to_xy(hex: &str) -> Result<(f64, f64, f64), HexColorError> {
    let (r, g, b) = parse_hex(hex)?;
    Ok(rgb_to_xy(r, g, b))
}

fn parse_hex(hex: &str) -> Result<(u8, u8, u8), HexColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(HexColorError::Format(hex.to_owned()));
    }
    let parse = |range: std::ops::Range<usize>| {
        u8::from_str_radix(digits.get(range).unwrap_or_default(), 16)
            .map_err(|_| HexColorError::Format(hex.to_owned()))
    };
    Ok((parse(0..2)?, parse(2..4)?, parse(4..6)?))
}

fn rgb_to_xy(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = inverse_gamma(f64::from(r) / 255.0);
    let g = inverse_gamma(f64::from(g) / 255.0);
    let b = inverse_gamma(f64::from(b) / 255.0);

    // Wide RGB D65
    let big_x = r * 0.664_511 + g * 0.154_324 + b * 0.162_028;
    let big_y = r * 0.283_881 + g * 0.668_433 + b * 0.047_685;
    let big_z = r * 0.000_088 + g * 0.072_310 + b * 0.986_039;

    let sum = big_x + big_y + big_z;
    if sum <= f64::EPSILON {
        // Black: no chromaticity. Report the D65 white point at zero brightness.
        return (0.3127, 0.3290, 0.0);
    }

    (big_x / sum, big_y / sum, big_y * 100.0)
}

fn xy_to_rgb(x: f64, y: f64, brightness_pct: f64) -> (u8, u8, u8) {
    let brightness = clamp_brightness(brightness_pct) / 100.0;
    if y <= f64::EPSILON {
        return (0, 0, 0);
    }

    let big_y = brightness;
    let big_x = (big_y / y) * x;
    let big_z = (big_y / y) * (1.0 - x - y);

    // Wide RGB D65, inverse
    let r = big_x * 1.656_492 - big_y * 0.354_851 - big_z * 0.255_038;
    let g = -big_x * 0.707_196 + big_y * 1.655_397 + big_z * 0.036_152;
    let b = big_x * 0.051_713 - big_y * 0.121_364 + big_z * 1.011_530;

    let (r, g, b) = (gamma(r), gamma(g), gamma(b));

    // Out-of-gamut values scale down rather than clip per channel,
    // preserving hue.
    let max = r.max(g).max(b);
    let scale = if max > 1.0 { 1.0 / max } else { 1.0 };

    (to_byte(r * scale), to_byte(g * scale), to_byte(b * scale))
}

fn inverse_gamma(c: f64) -> f64 {
    if c > 0.040_45 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

fn gamma(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        12.92 * c.max(0.0)
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[allow(clippy::as_conversions, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn brightness_clamps_to_valid_range() {
        assert_eq!(clamp_brightness(0.0), 1.0);
        assert_eq!(clamp_brightness(150.0), 100.0);
        assert_eq!(clamp_brightness(50.0), 50.0);
        assert_eq!(clamp_brightness(-10.0), 1.0);
    }

    #[test]
    fn mirek_clamps_to_bridge_range() {
        assert_eq!(clamp_mirek(100), 153);
        assert_eq!(clamp_mirek(600), 500);
        assert_eq!(clamp_mirek(366), 366);
        assert_eq!(clamp_mirek(153), 153);
        assert_eq!(clamp_mirek(500), 500);
    }

    #[test]
    fn mirek_kelvin_reciprocal() {
        assert_eq!(mirek_to_kelvin(500), 2000);
        assert_eq!(mirek_to_kelvin(153), 6535);
        assert_eq!(kelvin_to_mirek(2000), 500);
        assert_eq!(kelvin_to_mirek(6500), 153);
    }

    #[test]
    fn hex_parses_with_and_without_hash() {
        assert_eq!(parse_hex("#ff8000").unwrap(), (255, 128, 0));
        assert_eq!(parse_hex("ff8000").unwrap(), (255, 128, 0));
        assert!(parse_hex("#f80").is_err());
        assert!(parse_hex("#zzzzzz").is_err());
    }

    #[test]
    fn primary_red_lands_in_red_corner() {
        let (x, y, bri) = hex_to_xy("#ff0000").unwrap();
        assert!(x > 0.6, "red x should be large, got {x}");
        assert!(y < 0.35, "red y should be small, got {y}");
        assert!(bri > 0.0);
    }

    #[test]
    fn white_lands_near_d65() {
        let (x, y, _) = hex_to_xy("#ffffff").unwrap();
        assert!((x - 0.3127).abs() < 0.02, "white x near D65, got {x}");
        assert!((y - 0.3290).abs() < 0.02, "white y near D65, got {y}");
    }

    #[test]
    fn black_has_zero_brightness() {
        let (_, _, bri) = hex_to_xy("#000000").unwrap();
        assert_eq!(bri, 0.0);
        assert_eq!(xy_to_hex(0.3127, 0.3290, 0.0), xy_to_hex(0.3127, 0.3290, 1.0));
    }

    #[test]
    fn xy_round_trip_is_bounded() {
        // Lossy by design: gamut scaling and byte quantization both lose
        // information, but the trip must stay within tolerance.
        for &(x, y, bri) in &[
            (0.4575, 0.4099, 58.66),
            (0.3127, 0.3290, 80.0),
            (0.2, 0.3, 40.0),
        ] {
            let hex = xy_to_hex(x, y, bri);
            let (x2, y2, bri2) = hex_to_xy(&hex).unwrap();
            assert!((x - x2).abs() < 0.05, "x drifted: {x} -> {x2} via {hex}");
            assert!((y - y2).abs() < 0.05, "y drifted: {y} -> {y2} via {hex}");
            assert!(
                (bri - bri2).abs() < 10.0,
                "brightness drifted: {bri} -> {bri2} via {hex}"
            );
        }
    }

    #[test]
    fn hex_round_trip_is_bounded() {
        for hex in ["#ff0000", "#00ff00", "#4080c0", "#ffaa55"] {
            let (x, y, bri) = hex_to_xy(hex).unwrap();
            let back = xy_to_hex(x, y, bri);
            let (r1, g1, b1) = parse_hex(hex).unwrap();
            let (r2, g2, b2) = parse_hex(&back).unwrap();
            let dist = i32::from(r1).abs_diff(i32::from(r2))
                + i32::from(g1).abs_diff(i32::from(g2))
                + i32::from(b1).abs_diff(i32::from(b2));
            assert!(dist < 90, "{hex} -> {back} drifted too far ({dist})");
        }
    }
}
