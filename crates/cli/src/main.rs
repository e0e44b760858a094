#![deny(unsafe_code)]
//! CLI binary for colorkit.
//!
//! Each subcommand wraps one library operation and prints its result as
//! plain text, or as JSON with `--json`.

mod error;

use clap::{Parser, Subcommand};
use colorkit_core::{
    adjust_brightness, complementary_color, contrast_ratio, generate_palette, hsl_to_hex,
    invert_color, is_color_readable, is_valid_hex, rgb_to_hex, ColorError, Readability, Rgb,
    TextSize, WcagLevel, DEFAULT_PALETTE_SIZE,
};
use error::CliError;
use serde_json::{json, Value};
use std::process;

#[derive(Parser)]
#[command(name = "colorkit", about = "Color conversion and contrast toolkit")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a 6-digit hex color into RGB components.
    ToRgb { hex: String },
    /// Encode RGB components (clamped, truncated) as hex.
    ToHex {
        #[arg(allow_negative_numbers = true)]
        r: f64,
        #[arg(allow_negative_numbers = true)]
        g: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Convert a hex color to HSL.
    ToHsl { hex: String },
    /// Convert HSL (hue wraps, saturation/lightness clamp) to hex.
    HslToHex {
        #[arg(allow_negative_numbers = true)]
        h: f64,
        #[arg(allow_negative_numbers = true)]
        s: f64,
        #[arg(allow_negative_numbers = true)]
        l: f64,
    },
    /// Generate a lightness ramp around a base color.
    Palette {
        hex: String,

        /// Number of colors to generate.
        #[arg(short, long, default_value_t = DEFAULT_PALETTE_SIZE)]
        count: usize,
    },
    /// WCAG contrast ratio between two colors.
    Contrast { hex1: String, hex2: String },
    /// Check whether a string is a 3- or 6-digit hex color.
    Valid { hex: String },
    /// Invert each channel of a color.
    Invert { hex: String },
    /// Rotate a color's hue by 180 degrees.
    Complement { hex: String },
    /// Lighten (positive) or darken (negative) a color by a percentage.
    Brightness {
        hex: String,
        #[arg(allow_negative_numbers = true)]
        percent: f64,
    },
    /// Check whether two colors meet a WCAG contrast threshold.
    Readable {
        hex1: String,
        hex2: String,

        /// Conformance level (AA or AAA).
        #[arg(long, default_value_t = WcagLevel::Aa)]
        level: WcagLevel,

        /// Text size (normal or large).
        #[arg(long, default_value_t = TextSize::Normal)]
        size: TextSize,
    },
}

/// Result of one command: a JSON value for `--json` and a text rendering.
struct Output {
    json: Value,
    text: String,
}

impl Output {
    fn hex(hex: String) -> Self {
        Output {
            json: Value::String(hex.clone()),
            text: hex,
        }
    }

    fn flag(value: bool) -> Self {
        Output {
            json: Value::Bool(value),
            text: value.to_string(),
        }
    }
}

/// Maps a library sentinel to an input error naming the rejected color.
fn require<T>(value: Option<T>, hex: &str) -> Result<T, CliError> {
    value.ok_or_else(|| CliError::Color(ColorError::InvalidHex(hex.to_string())))
}

fn execute(command: Command) -> Result<Output, CliError> {
    let output = match command {
        Command::ToRgb { hex } => {
            let rgb: Rgb = hex.parse()?;
            Output {
                json: serde_json::to_value(rgb)?,
                text: format!("{} {} {}", rgb.r, rgb.g, rgb.b),
            }
        }
        Command::ToHex { r, g, b } => Output::hex(rgb_to_hex(r, g, b)),
        Command::ToHsl { hex } => {
            let hsl = hex.parse::<Rgb>()?.to_hsl();
            Output {
                json: serde_json::to_value(hsl)?,
                text: format!("{} {} {}", hsl.h, hsl.s, hsl.l),
            }
        }
        Command::HslToHex { h, s, l } => Output::hex(hsl_to_hex(h, s, l)),
        Command::Palette { hex, count } => {
            // Reject the base up front so an invalid color is an error, not an empty list.
            let _base: Rgb = hex.parse()?;
            let palette = generate_palette(&hex, count);
            Output {
                text: palette.join("\n"),
                json: json!(palette),
            }
        }
        Command::Contrast { hex1, hex2 } => {
            let ratio = contrast_ratio(hex1.parse()?, hex2.parse()?);
            Output {
                json: json!(ratio),
                text: format!("{ratio:.2}"),
            }
        }
        Command::Valid { hex } => Output::flag(is_valid_hex(&hex)),
        Command::Invert { hex } => Output::hex(require(invert_color(&hex), &hex)?),
        Command::Complement { hex } => Output::hex(require(complementary_color(&hex), &hex)?),
        Command::Brightness { hex, percent } => {
            Output::hex(require(adjust_brightness(&hex, percent), &hex)?)
        }
        Command::Readable {
            hex1,
            hex2,
            level,
            size,
        } => Output::flag(is_color_readable(
            &hex1,
            &hex2,
            Readability::new(level, size),
        )),
    };
    Ok(output)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let json_mode = cli.json;
    let output = execute(cli.command)?;
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&output.json)?);
    } else if !output.text.is_empty() {
        println!("{}", output.text);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exec(args: &[&str]) -> Result<Output, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("colorkit").chain(args.iter().copied()))
            .expect("arguments should parse");
        execute(cli.command)
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn to_rgb_prints_components_and_record() {
        let out = exec(&["to-rgb", "#ff8000"]).unwrap();
        assert_eq!(out.text, "255 128 0");
        assert_eq!(out.json, json!({"r": 255, "g": 128, "b": 0}));
    }

    #[test]
    fn to_rgb_rejects_shorthand() {
        let err = exec(&["to-rgb", "#fff"]).err().unwrap();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn to_hex_accepts_negative_and_fractional_components() {
        let out = exec(&["to-hex", "-10", "128.7", "300"]).unwrap();
        assert_eq!(out.text, "#0080ff");
    }

    #[test]
    fn to_hsl_prints_components() {
        let out = exec(&["to-hsl", "00ff00"]).unwrap();
        assert_eq!(out.text, "120 100 50");
        assert_eq!(out.json, json!({"h": 120, "s": 100, "l": 50}));
    }

    #[test]
    fn hsl_to_hex_wraps_negative_hue() {
        let out = exec(&["hsl-to-hex", "-240", "100", "50"]).unwrap();
        assert_eq!(out.text, "#00ff00");
    }

    #[test]
    fn palette_uses_default_count() {
        let out = exec(&["palette", "#3498db"]).unwrap();
        assert_eq!(out.text.lines().count(), DEFAULT_PALETTE_SIZE);
        assert_eq!(out.json.as_array().map(Vec::len), Some(DEFAULT_PALETTE_SIZE));
    }

    #[test]
    fn palette_honors_count_flag() {
        let out = exec(&["palette", "#3498db", "--count", "3"]).unwrap();
        assert_eq!(out.text.lines().count(), 3);
    }

    #[test]
    fn palette_rejects_invalid_base() {
        assert!(exec(&["palette", "nope"]).is_err());
    }

    #[test]
    fn contrast_prints_two_decimals() {
        let out = exec(&["contrast", "#ffffff", "#000000"]).unwrap();
        assert_eq!(out.text, "21.00");
    }

    #[test]
    fn contrast_rejects_invalid_color() {
        let err = exec(&["contrast", "#ffffff", "black"]).err().unwrap();
        assert!(err.to_string().contains("black"));
    }

    #[test]
    fn valid_accepts_shorthand() {
        assert_eq!(exec(&["valid", "#abc"]).unwrap().json, json!(true));
        assert_eq!(exec(&["valid", "#abcd"]).unwrap().json, json!(false));
    }

    #[test]
    fn invert_and_complement() {
        assert_eq!(exec(&["invert", "#000000"]).unwrap().text, "#ffffff");
        assert_eq!(exec(&["complement", "#ff0000"]).unwrap().text, "#00ffff");
        assert!(exec(&["invert", "#000"]).is_err());
    }

    #[test]
    fn brightness_accepts_negative_percent() {
        let out = exec(&["brightness", "#808080", "-50"]).unwrap();
        assert_eq!(out.text, "#404040");
    }

    #[test]
    fn readable_defaults_to_aa_normal() {
        assert_eq!(exec(&["readable", "#767676", "#ffffff"]).unwrap().text, "true");
    }

    #[test]
    fn readable_with_level_and_size() {
        let strict = exec(&["readable", "#767676", "#ffffff", "--level", "AAA"]).unwrap();
        assert_eq!(strict.text, "false");
        let large = exec(&[
            "readable", "#767676", "#ffffff", "--level", "AAA", "--size", "large",
        ])
        .unwrap();
        assert_eq!(large.text, "true");
    }

    #[test]
    fn readable_rejects_unknown_level_at_parse_time() {
        let parsed = Cli::try_parse_from(["colorkit", "readable", "#fff", "#000", "--level", "A"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn json_flag_is_global() {
        let cli = Cli::try_parse_from(["colorkit", "invert", "#000000", "--json"]).unwrap();
        assert!(cli.json);
    }
}
