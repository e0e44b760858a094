#![deny(unsafe_code)]
//! Stateless color helpers: hex/RGB/HSL conversion, palettes, and WCAG contrast.
//!
//! Provides the `Rgb`/`Hsl` records, conversion functions between them and
//! `#rrggbb` strings, lightness-ramp palettes, inversion, complementary hue,
//! brightness adjustment, relative luminance and readability checks.
//!
//! Bad input never panics: unparseable hex yields `None`, an empty `Vec` or
//! `false`; out-of-range numbers are clamped and hue wraps modulo 360.

pub mod color;
pub mod contrast;
pub mod error;
pub mod palette;

pub use color::{hex_to_rgb, hsl_to_hex, is_valid_hex, rgb_to_hex, rgb_to_hsl, Hsl, Rgb};
pub use contrast::{
    calculate_contrast, contrast_ratio, is_color_readable, is_color_readable_named,
    relative_luminance, Readability, TextSize, WcagLevel,
};
pub use error::ColorError;
pub use palette::{
    adjust_brightness, complementary_color, generate_palette, invert_color, DEFAULT_PALETTE_SIZE,
};
