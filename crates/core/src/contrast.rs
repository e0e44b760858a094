//! WCAG relative luminance, contrast ratio and readability thresholds.

use crate::color::{hex_to_rgb, Rgb};
use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WcagLevel {
    #[default]
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

/// Text size category used to pick the WCAG threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

/// Options for [`is_color_readable`].
///
/// Defaults to level AA with normal-size text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Readability {
    pub level: WcagLevel,
    pub text_size: TextSize,
}

impl WcagLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            WcagLevel::Aa => "AA",
            WcagLevel::Aaa => "AAA",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WcagLevel {
    type Err = ColorError;

    /// Accepts exactly `AA` or `AAA`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AA" => Ok(WcagLevel::Aa),
            "AAA" => Ok(WcagLevel::Aaa),
            other => Err(ColorError::UnknownLevel(other.to_string())),
        }
    }
}

impl TextSize {
    pub fn as_str(self) -> &'static str {
        match self {
            TextSize::Normal => "normal",
            TextSize::Large => "large",
        }
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextSize {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(TextSize::Normal),
            "large" => Ok(TextSize::Large),
            other => Err(ColorError::UnknownTextSize(other.to_string())),
        }
    }
}

impl Readability {
    pub const fn new(level: WcagLevel, text_size: TextSize) -> Self {
        Readability { level, text_size }
    }

    /// Minimum contrast ratio required for this level and text size.
    pub fn min_ratio(self) -> f64 {
        match (self.level, self.text_size) {
            (WcagLevel::Aa, TextSize::Normal) => 4.5,
            (WcagLevel::Aa, TextSize::Large) => 3.0,
            (WcagLevel::Aaa, TextSize::Normal) => 7.0,
            (WcagLevel::Aaa, TextSize::Large) => 4.5,
        }
    }
}

/// Linearizes one 8-bit sRGB channel using the WCAG 2.x breakpoint of 0.03928.
fn channel_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in [0, 1].
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * channel_to_linear(rgb.r)
        + 0.7152 * channel_to_linear(rgb.g)
        + 0.0722 * channel_to_linear(rgb.b)
}

/// Contrast ratio between two parsed colors, in [1, 21].
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let lum_a = relative_luminance(a);
    let lum_b = relative_luminance(b);
    let brightest = lum_a.max(lum_b);
    let darkest = lum_a.min(lum_b);
    (brightest + 0.05) / (darkest + 0.05)
}

/// Contrast ratio between two hex colors.
///
/// Returns `None` if either input fails [`hex_to_rgb`]. The result does not
/// depend on argument order.
pub fn calculate_contrast(hex1: &str, hex2: &str) -> Option<f64> {
    let a = hex_to_rgb(hex1)?;
    let b = hex_to_rgb(hex2)?;
    Some(contrast_ratio(a, b))
}

/// Returns true if the two colors meet the WCAG threshold for `readability`.
///
/// Invalid colors are never readable.
pub fn is_color_readable(hex1: &str, hex2: &str, readability: Readability) -> bool {
    calculate_contrast(hex1, hex2).is_some_and(|ratio| ratio >= readability.min_ratio())
}

/// String-keyed form of [`is_color_readable`].
///
/// An unrecognized `level` is never readable. Any `text_size` other than
/// `"large"` is treated as normal text.
pub fn is_color_readable_named(hex1: &str, hex2: &str, level: &str, text_size: &str) -> bool {
    let Ok(level) = level.parse::<WcagLevel>() else {
        return false;
    };
    let text_size = text_size.parse().unwrap_or(TextSize::Normal);
    is_color_readable(hex1, hex2, Readability::new(level, text_size))
}
