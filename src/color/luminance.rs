use super::LinearRgb;

/// Channel values at or below this sit on the linear toe of the sRGB curve.
const LINEAR_TOE_THRESHOLD: f64 = 0.039_28;
/// Divisor applied on the linear toe.
const LINEAR_TOE_DIVISOR: f64 = 12.92;
/// Luma weights for red, green and blue.
const LUMA_COEFFICIENTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// What: Undo the sRGB transfer curve for a single channel.
///
/// Inputs:
/// - `v`: Channel intensity in `[0, 1]`.
///
/// Output:
/// - Gamma-corrected intensity.
fn gamma_correct(v: f64) -> f64 {
    if v <= LINEAR_TOE_THRESHOLD {
        v / LINEAR_TOE_DIVISOR
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// What: Compute WCAG 2.0 relative luminance.
///
/// Inputs:
/// - `rgb`: Normalized channels; values outside `[0, 1]` are not checked.
///
/// Output:
/// - Luminance in `[0, 1]` for in-range input.
///
/// Details:
/// - Uses the piecewise sRGB correction (linear toe below 0.03928, 2.4 power above).
#[must_use]
pub fn relative_luminance(rgb: LinearRgb) -> f64 {
    rgb.channels()
        .into_iter()
        .zip(LUMA_COEFFICIENTS)
        .map(|(v, weight)| weight * gamma_correct(v))
        .sum()
}
