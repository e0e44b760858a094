//! Color records and conversion functions between hex, RGB and HSL.
//!
//! Provides two color types (`Rgb`, `Hsl`) and pure conversion functions
//! between them and the textual `#rrggbb` form. Malformed hex input is
//! reported as `None`; out-of-range numeric input is clamped and hue wraps
//! modulo 360.

use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 8-bit RGB color.
///
/// Serializes as a plain `{ "r", "g", "b" }` record. `Display` renders the
/// canonical lowercase `#rrggbb` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color with integer components.
///
/// `h` is in degrees [0, 360); `s` and `l` are percentages in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parses a 6-digit hex color like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Same rules as [`hex_to_rgb`].
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        hex_to_rgb(hex)
    }

    /// Converts the color to a lowercase hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s).ok_or_else(|| ColorError::InvalidHex(s.to_string()))
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb { r, g, b }
    }
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Hsl { h, s, l }
    }

    /// Converts to a hex string via [`hsl_to_hex`].
    pub fn to_hex(self) -> String {
        hsl_to_hex(self.h as f64, self.s as f64, self.l as f64)
    }
}

/// Strips a single optional `#` and returns the digits if they are all ASCII hex.
fn hex_digits(hex: &str) -> Option<&str> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(digits)
    } else {
        None
    }
}

/// Parses a 6-digit hex color with an optional `#` prefix.
///
/// Returns `None` for every other shape, including the 3-digit shorthand
/// that [`is_valid_hex`] accepts.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex_digits(hex).filter(|d| d.len() == 6)?;
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Clamps to [0, 255] and truncates toward zero. NaN maps to 0.
fn channel_byte(c: f64) -> u8 {
    c.clamp(0.0, 255.0) as u8
}

/// Encodes RGB components as a lowercase `#rrggbb` string.
///
/// Components are clamped to [0, 255] and fractional parts are dropped, so
/// `255.7` encodes as `ff` and `128.7` as `80`.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Rgb::new(channel_byte(r), channel_byte(g), channel_byte(b)).to_string()
}

/// Converts 8-bit RGB to HSL with every component rounded to the nearest integer.
///
/// Achromatic colors (r == g == b) get `h = 0, s = 0`. A hue that rounds up
/// to 360 is reported as 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Hsl {
        h: (h * 360.0).round() as u16 % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Piecewise hue-to-channel mapping with breakpoints at 1/6, 1/2 and 2/3.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Converts HSL to a lowercase `#rrggbb` string.
///
/// `h` wraps modulo 360 (negative hues included); `s` and `l` are
/// percentages clamped to [0, 100].
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    rgb_to_hex(
        (r * 255.0).round(),
        (g * 255.0).round(),
        (b * 255.0).round(),
    )
}

/// Returns true for 3- or 6-digit hex colors with an optional `#` prefix.
///
/// Looser than [`hex_to_rgb`], which only accepts the 6-digit form. Callers
/// rely on both behaviors, so they are kept distinct.
pub fn is_valid_hex(hex: &str) -> bool {
    matches!(hex_digits(hex).map(str::len), Some(3 | 6))
}
