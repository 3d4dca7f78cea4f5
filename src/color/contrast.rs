use super::{ContrastError, HexColor, relative_luminance};

/// Ratio a pairing must reach for normal-size text (WCAG 2.0 AA).
pub const MIN_COMPLIANT_RATIO: f64 = 4.5;

/// What: Round a ratio to three decimal places.
fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// What: WCAG contrast ratio between two already-parsed colours.
///
/// Inputs:
/// - `a`, `b`: Colours in either order.
///
/// Output:
/// - `(Lmax + 0.05) / (Lmin + 0.05)` rounded to three decimals; always `>= 1`.
#[must_use]
pub fn contrast_between(a: HexColor, b: HexColor) -> f64 {
    let la = relative_luminance(a.to_linear());
    let lb = relative_luminance(b.to_linear());
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    round3((lighter + 0.05) / (darker + 0.05))
}

/// What: WCAG contrast ratio between two hex colour literals.
///
/// Inputs:
/// - `a`, `b`: 3- or 6-digit literals, optionally prefixed with `#`.
///
/// Output:
/// - Symmetric ratio rounded to three decimals.
///
/// # Errors
/// - `ContrastError::InvalidColorFormat` when either literal is malformed.
pub fn contrast(a: &str, b: &str) -> Result<f64, ContrastError> {
    Ok(contrast_between(HexColor::parse(a)?, HexColor::parse(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Approximate equality for rounded ratios.
    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    /// What: Black on white reaches the maximum ratio.
    ///
    /// Inputs:
    /// - `#ffffff` and `#000000`.
    ///
    /// Output:
    /// - Exactly 21.0 after rounding.
    fn black_on_white_is_21() {
        assert!(close(contrast("#ffffff", "#000000").unwrap(), 21.0));
    }

    #[test]
    /// What: Identical colours and short-form expansion.
    ///
    /// Inputs:
    /// - A colour against itself, and `#000` against `#000000`.
    ///
    /// Output:
    /// - Ratio 1.0 in both cases.
    fn identical_colours_give_one() {
        for c in ["#000", "#123456", "#fff", "abc"] {
            assert!(close(contrast(c, c).unwrap(), 1.0));
        }
        assert!(close(
            contrast("#000", "#000000").unwrap(),
            contrast("#000000", "#000000").unwrap()
        ));
        assert!(close(contrast("#123", "#112233").unwrap(), 1.0));
    }

    #[test]
    /// What: Symmetry and reference values.
    ///
    /// Inputs:
    /// - Several pairs in both orders.
    ///
    /// Output:
    /// - Equal ratios either way, matching precomputed WCAG values.
    fn symmetric_with_reference_values() {
        let cases = [
            ("#777777", "#000", 4.689),
            ("#777777", "#ffffff", 4.478),
            ("#767676", "#ffffff", 4.542),
            ("#ff0000", "#ffffff", 3.998),
            ("#336699", "#000", 3.501),
        ];
        for (a, b, expected) in cases {
            let ab = contrast(a, b).unwrap();
            let ba = contrast(b, a).unwrap();
            assert!(close(ab, ba), "{a}/{b} not symmetric");
            assert!(close(ab, expected), "{a}/{b}: got {ab}, expected {expected}");
        }
    }

    #[test]
    /// What: Results are rounded to three decimals and never below one.
    ///
    /// Inputs:
    /// - A sweep of grey levels against a fixed colour.
    ///
    /// Output:
    /// - `ratio >= 1` and `ratio * 1000` is integral.
    fn rounded_and_at_least_one() {
        for level in (0..=255u8).step_by(17) {
            let r = contrast_between(HexColor::new(level, level, level), HexColor::new(40, 90, 200));
            assert!(r >= 1.0);
            assert!(((r * 1000.0) - (r * 1000.0).round()).abs() < 1e-6);
        }
    }

    #[test]
    /// What: Malformed input propagates the parse error.
    ///
    /// Inputs:
    /// - One valid and one truncated literal.
    ///
    /// Output:
    /// - `InvalidColorFormat` naming the bad literal.
    fn invalid_literal_propagates() {
        assert_eq!(
            contrast("#fff", "#ff"),
            Err(ContrastError::InvalidColorFormat {
                input: "#ff".to_string()
            })
        );
    }
}
