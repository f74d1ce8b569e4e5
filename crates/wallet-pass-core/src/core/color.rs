// crates/wallet-pass-core/src/core/color.rs
// ============================================================================
// Module: Wallet Pass Color Conversion
// Description: Hex and device-palette color conversions for pass headers.
// Purpose: Normalize form colors into the `rgb(r, g, b)` notation passes require.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Forms submit colors as `#RRGGBB`; the pass renderer expects the
//! device-palette notation `rgb(r, g, b)` with decimal channels. This module
//! converts between both notations, picks a readable text color for a
//! background, and computes complementary colors. Every function is pure and
//! fails closed with [`ColorError::InvalidColorFormat`] on malformed input.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Text color returned for light backgrounds.
pub const DARK_TEXT: &str = "#000000";
/// Text color returned for dark backgrounds.
pub const LIGHT_TEXT: &str = "#FFFFFF";
/// Luminance above which dark text is preferred (strictly greater).
pub const LUMINANCE_THRESHOLD: f64 = 0.5;

/// Device-palette prefix.
const PALETTE_PREFIX: &str = "rgb(";
/// Number of hex digits in a `RRGGBB` color.
const HEX_DIGITS: usize = 6;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Color conversion errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input is neither `#RRGGBB` nor `rgb(r, g, b)` as required.
    #[error("invalid color format: {input} (expected {expected})")]
    InvalidColorFormat {
        /// Raw input that failed to parse.
        input: String,
        /// Notation the caller asked for.
        expected: ColorNotation,
    },
}

impl ColorError {
    /// Builds an invalid-format error for the given notation.
    fn invalid(input: &str, expected: ColorNotation) -> Self {
        Self::InvalidColorFormat {
            input: input.to_string(),
            expected,
        }
    }
}

/// Color notations accepted by the conversion helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorNotation {
    /// `#RRGGBB` with an optional leading `#`.
    Hex,
    /// `rgb(r, g, b)` with decimal channels.
    DevicePalette,
    /// Either notation.
    Any,
}

impl fmt::Display for ColorNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Hex => "#RRGGBB",
            Self::DevicePalette => "rgb(r, g, b)",
            Self::Any => "#RRGGBB or rgb(r, g, b)",
        };
        f.write_str(label)
    }
}

// ============================================================================
// SECTION: Color Triplet
// ============================================================================

/// Three 8-bit color channels.
///
/// # Invariants
/// - Serializes as the device-palette string `rgb(r, g, b)`.
/// - Never persisted on its own; always derived from a hex or palette string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Rgb {
    /// Creates a color from raw channels.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
        }
    }

    /// Parses `#RRGGBB` (the leading `#` is optional, digits are case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] when the input is not six hex digits.
    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != HEX_DIGITS || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(ColorError::invalid(value, ColorNotation::Hex));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::invalid(value, ColorNotation::Hex))
        };
        Ok(Self::new(channel(0 .. 2)?, channel(2 .. 4)?, channel(4 .. 6)?))
    }

    /// Parses `rgb(r, g, b)`, tolerating whitespace around channels and separators.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] when the input does not match
    /// or a channel exceeds 255.
    pub fn from_device_palette(value: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::invalid(value, ColorNotation::DevicePalette);
        let inner = value
            .trim()
            .strip_prefix(PALETTE_PREFIX)
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let mut channels = [0_u8; 3];
        let mut parts = inner.split(',');
        for slot in &mut channels {
            let part = parts.next().ok_or_else(invalid)?.trim();
            if part.is_empty() || !part.bytes().all(|byte| byte.is_ascii_digit()) {
                return Err(invalid());
            }
            *slot = part.parse::<u8>().map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        let [red, green, blue] = channels;
        Ok(Self::new(red, green, blue))
    }

    /// Parses either notation. Inputs starting with `rgb` use the palette parser.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] when neither notation matches.
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        if value.trim_start().starts_with("rgb") {
            Self::from_device_palette(value)
                .map_err(|_| ColorError::invalid(value, ColorNotation::Any))
        } else {
            Self::from_hex(value).map_err(|_| ColorError::invalid(value, ColorNotation::Any))
        }
    }

    /// Renders the color as lower-case `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Perceptual luminance in `[0, 1]` using the 0.299/0.587/0.114 weights.
    #[must_use]
    pub fn luminance(self) -> f64 {
        let weighted = 0.299 * f64::from(self.red)
            + 0.587 * f64::from(self.green)
            + 0.114 * f64::from(self.blue);
        weighted / 255.0
    }

    /// Returns the channel-wise inverse (`255 - channel`).
    #[must_use]
    pub const fn complement(self) -> Self {
        Self::new(u8::MAX - self.red, u8::MAX - self.green, u8::MAX - self.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// SECTION: Conversions
// ============================================================================

/// Converts `#RRGGBB` to the device-palette string `rgb(r, g, b)`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] when the input is not valid hex.
pub fn hex_to_device_palette(hex: &str) -> Result<String, ColorError> {
    Rgb::from_hex(hex).map(|color| color.to_string())
}

/// Converts a device-palette string to lower-case `#rrggbb`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] when the input does not parse.
pub fn device_palette_to_hex(triplet: &str) -> Result<String, ColorError> {
    Rgb::from_device_palette(triplet).map(Rgb::to_hex)
}

/// Picks black or white text for the given background (hex or palette notation).
///
/// Returns [`DARK_TEXT`] when luminance is strictly above
/// [`LUMINANCE_THRESHOLD`], otherwise [`LIGHT_TEXT`].
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] when the background does not parse.
pub fn pick_readable_text_color(background: &str) -> Result<&'static str, ColorError> {
    let color = Rgb::parse(background)?;
    if color.luminance() > LUMINANCE_THRESHOLD { Ok(DARK_TEXT) } else { Ok(LIGHT_TEXT) }
}

/// Returns the complementary color of `#RRGGBB` as lower-case hex.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] when the input is not valid hex.
pub fn complementary_color(hex: &str) -> Result<String, ColorError> {
    Rgb::from_hex(hex).map(|color| color.complement().to_hex())
}
