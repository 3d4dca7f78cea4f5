//! Colour parsing and WCAG 2.0 contrast maths.
//!
//! Everything here is pure: literals go in, luminance and ratios come out.

/// Contrast ratio between two colours.
mod contrast;
/// Error type shared across the crate.
mod error;
/// Hex literal parsing and channel conversion.
mod hex;
/// Relative luminance.
mod luminance;

pub use contrast::{MIN_COMPLIANT_RATIO, contrast, contrast_between};
pub use error::ContrastError;
pub use hex::{HexColor, LinearRgb, to_linear_rgb};
pub use luminance::relative_luminance;
