use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::ContrastError;

/// What: Normalized RGB triple with each channel in `[0, 1]`.
///
/// Inputs: Produced by [`to_linear_rgb`] or [`HexColor::to_linear`].
///
/// Output: Feeds [`super::relative_luminance`].
///
/// Details:
/// - Channels are the raw byte values divided by 255, before gamma correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl LinearRgb {
    /// Channels as an array in `r, g, b` order.
    #[must_use]
    pub const fn channels(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// What: Validated colour literal stored as three bytes.
///
/// Inputs: Parsed from `#RGB`, `RGB`, `#RRGGBB` or `RRGGBB` (case-insensitive).
///
/// Output: Displays as the canonical lowercase `#rrggbb` form.
///
/// Details:
/// - Three-digit input is expanded by doubling each digit (`abc` -> `aabbcc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red byte.
    pub r: u8,
    /// Green byte.
    pub g: u8,
    /// Blue byte.
    pub b: u8,
}

impl HexColor {
    /// Pure black, the stock partner for single-colour rules.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build a colour from raw bytes.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// What: Parse a hex colour literal.
    ///
    /// Inputs:
    /// - `s`: Literal such as `#fff`, `FFFFFF` or `#1e1e2e`. Surrounding whitespace is ignored.
    ///
    /// Output:
    /// - The parsed colour.
    ///
    /// # Errors
    /// - `ContrastError::InvalidColorFormat` when the digits are not exactly 3 or 6 hex characters.
    pub fn parse(s: &str) -> Result<Self, ContrastError> {
        let invalid = || ContrastError::InvalidColorFormat {
            input: s.to_string(),
        };
        let t = s.trim();
        let h = t.strip_prefix('#').unwrap_or(t);
        if !h.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let expanded: String = match h.len() {
            3 => h.chars().flat_map(|c| [c, c]).collect(),
            6 => h.to_string(),
            _ => return Err(invalid()),
        };
        let byte = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(byte(0)?, byte(2)?, byte(4)?))
    }

    /// What: Quantize a `[0, 1]` channel triple into bytes.
    ///
    /// Inputs:
    /// - `r`, `g`, `b`: Channel intensities; values outside `[0, 1]` are clamped.
    ///
    /// Output:
    /// - Colour whose bytes are `round(v * 255)` per channel.
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let q = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(q(r), q(g), q(b))
    }

    /// Channels divided by 255.
    #[must_use]
    pub fn to_linear(self) -> LinearRgb {
        LinearRgb {
            r: f64::from(self.r) / 255.0,
            g: f64::from(self.g) / 255.0,
            b: f64::from(self.b) / 255.0,
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ContrastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// What: Convert a hex colour literal to a normalized RGB triple.
///
/// Inputs:
/// - `hex`: 3- or 6-digit literal, optionally prefixed with `#`.
///
/// Output:
/// - Channels in `[0, 1]`.
///
/// # Errors
/// - `ContrastError::InvalidColorFormat` when `hex` is malformed.
pub fn to_linear_rgb(hex: &str) -> Result<LinearRgb, ContrastError> {
    HexColor::parse(hex).map(HexColor::to_linear)
}
