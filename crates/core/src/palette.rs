//! Palette generation and single-color transforms on hex colors.
//!
//! Every function here parses its input with [`hex_to_rgb`] and returns a
//! sentinel (`None` or an empty `Vec`) when that fails.

use crate::color::{hex_to_rgb, hsl_to_hex, rgb_to_hex};

/// Number of entries produced when the caller has no preference.
pub const DEFAULT_PALETTE_SIZE: usize = 5;

/// Lightness offset of the first palette entry relative to the base color.
const PALETTE_START_OFFSET: f64 = -30.0;

/// Lightness step between consecutive palette entries.
const PALETTE_STEP: f64 = 15.0;

/// Generates `count` shades of `base_hex` on a lightness ramp.
///
/// Hue and saturation are held fixed. Entry `i` has lightness
/// `base_l - 30 + 15 * i`, clamped to [0, 100], so the ramp is the same
/// regardless of `count`. Returns an empty `Vec` if `base_hex` is not a
/// 6-digit hex color.
pub fn generate_palette(base_hex: &str, count: usize) -> Vec<String> {
    let Some(base) = hex_to_rgb(base_hex) else {
        return Vec::new();
    };
    let hsl = base.to_hsl();

    (0..count)
        .map(|i| {
            let l = hsl.l as f64 + PALETTE_START_OFFSET + PALETTE_STEP * i as f64;
            hsl_to_hex(hsl.h as f64, hsl.s as f64, l.clamp(0.0, 100.0))
        })
        .collect()
}

/// Inverts each channel (`255 - c`).
pub fn invert_color(hex: &str) -> Option<String> {
    let rgb = hex_to_rgb(hex)?;
    Some(rgb_to_hex(
        (255 - rgb.r) as f64,
        (255 - rgb.g) as f64,
        (255 - rgb.b) as f64,
    ))
}

/// Rotates the hue by 180 degrees, keeping saturation and lightness.
pub fn complementary_color(hex: &str) -> Option<String> {
    let hsl = hex_to_rgb(hex)?.to_hsl();
    let hue = (hsl.h + 180) % 360;
    Some(hsl_to_hex(hue as f64, hsl.s as f64, hsl.l as f64))
}

/// Scales every channel by `1 + percent / 100`.
///
/// Positive `percent` lightens, negative darkens. Channels are clamped to
/// [0, 255] before rounding.
pub fn adjust_brightness(hex: &str, percent: f64) -> Option<String> {
    let rgb = hex_to_rgb(hex)?;
    let adjust = |c: u8| {
        let c = c as f64;
        (c + c * percent / 100.0).clamp(0.0, 255.0).round()
    };
    Some(rgb_to_hex(adjust(rgb.r), adjust(rgb.g), adjust(rgb.b)))
}
