//! Error types for colorkit.
//!
//! The color functions themselves report bad input through sentinels
//! (`None`, empty `Vec`, `false`). `ColorError` is only produced by the
//! `FromStr` impls, for callers that want a typed reason.

use thiserror::Error;

/// Errors produced when parsing colors or readability settings from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A string was not a 6-digit hex color.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// A WCAG conformance level other than `AA` or `AAA`.
    #[error("unknown WCAG level: {0:?} (expected AA or AAA)")]
    UnknownLevel(String),

    /// A text size other than `normal` or `large`.
    #[error("unknown text size: {0:?} (expected normal or large)")]
    UnknownTextSize(String),
}
