//! Randomized search for a replacement colour that passes the contrast threshold.

use rand::Rng;
use tracing::{debug, info};

use crate::color::{ContrastError, HexColor, MIN_COMPLIANT_RATIO, contrast_between};

/// Attempts allowed before a search gives up, unless configured otherwise.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 100_000;

/// What: Bounds for the rejection-sampling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Maximum number of candidates drawn per search.
    pub max_attempts: u64,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// What: Decide whether a candidate ratio is acceptable.
///
/// Details:
/// - Must exceed [`MIN_COMPLIANT_RATIO`]. When `max_ratio` is the minimum itself the ceiling is
///   open; otherwise the ratio must also stay strictly below `max_ratio`.
fn accepts(ratio: f64, max_ratio: f64) -> bool {
    if ratio <= MIN_COMPLIANT_RATIO {
        return false;
    }
    (max_ratio - MIN_COMPLIANT_RATIO).abs() < f64::EPSILON || ratio < max_ratio
}

/// What: Draw a random colour with each channel uniform in `[0, 1]`, quantized to bytes.
fn draw<R: Rng>(rng: &mut R) -> HexColor {
    HexColor::from_unit(
        rng.random_range(0.0..=1.0),
        rng.random_range(0.0..=1.0),
        rng.random_range(0.0..=1.0),
    )
}

/// What: Find a colour that contrasts with `reference` above the legal minimum.
///
/// Inputs:
/// - `reference`: Colour literal to pair with.
/// - `max_ratio`: Upper bound on the result's ratio; pass [`MIN_COMPLIANT_RATIO`] for no bound.
/// - `policy`: Attempt ceiling.
/// - `rng`: Random source owned by the caller.
///
/// Output:
/// - Accepted candidate; its ratio against `reference` is `> 4.5` and, when bounded, `< max_ratio`.
///
/// # Errors
/// - `InvalidRatioRequest` if `max_ratio < 4.5` (or NaN); no candidates are drawn.
/// - `InvalidColorFormat` if `reference` does not parse; no candidates are drawn.
/// - `SearchExhausted` once `policy.max_attempts` candidates were rejected.
///
/// Details:
/// - Contrast is measured on the quantized colour, so the returned hex is exactly what passed.
pub fn find_alternate<R: Rng>(
    reference: &str,
    max_ratio: f64,
    policy: &SearchPolicy,
    rng: &mut R,
) -> Result<HexColor, ContrastError> {
    if max_ratio.is_nan() || max_ratio < MIN_COMPLIANT_RATIO {
        return Err(ContrastError::InvalidRatioRequest {
            requested: max_ratio,
        });
    }
    let reference = HexColor::parse(reference)?;
    for attempt in 1..=policy.max_attempts {
        let candidate = draw(rng);
        let ratio = contrast_between(reference, candidate);
        if accepts(ratio, max_ratio) {
            debug!(%reference, %candidate, ratio, attempt, "accepted candidate");
            return Ok(candidate);
        }
    }
    info!(%reference, max_ratio, attempts = policy.max_attempts, "search exhausted");
    Err(ContrastError::SearchExhausted {
        attempts: policy.max_attempts,
    })
}

/// What: Produce several independent suggestions for the same reference.
///
/// Inputs:
/// - `count`: Number of suggestions wanted.
/// - Remaining arguments as for [`find_alternate`].
///
/// Output:
/// - `count` colours, possibly with repeats.
///
/// # Errors
/// - The first error from [`find_alternate`].
pub fn find_alternates<R: Rng>(
    reference: &str,
    max_ratio: f64,
    count: usize,
    policy: &SearchPolicy,
    rng: &mut R,
) -> Result<Vec<HexColor>, ContrastError> {
    (0..count)
        .map(|_| find_alternate(reference, max_ratio, policy, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::contrast;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// RNG that fails the test if it is ever asked for a value.
    struct NoDraws;

    impl rand::RngCore for NoDraws {
        fn next_u32(&mut self) -> u32 {
            panic!("search drew a candidate")
        }
        fn next_u64(&mut self) -> u64 {
            panic!("search drew a candidate")
        }
        fn fill_bytes(&mut self, _dst: &mut [u8]) {
            panic!("search drew a candidate")
        }
    }

    #[test]
    /// What: Unbounded search returns a compliant colour.
    ///
    /// Inputs:
    /// - Several references with a seeded RNG and the default ceiling.
    ///
    /// Output:
    /// - Every result contrasts above 4.5 with its reference.
    fn default_ceiling_returns_compliant_colour() {
        let mut rng = StdRng::seed_from_u64(7);
        for reference in ["#000", "#fff", "#336699", "#ff0000", "#eeeeee"] {
            let c = find_alternate(reference, MIN_COMPLIANT_RATIO, &SearchPolicy::default(), &mut rng)
                .unwrap();
            let ratio = contrast(reference, &c.to_string()).unwrap();
            assert!(ratio > MIN_COMPLIANT_RATIO, "{reference} -> {c} = {ratio}");
        }
    }

    #[test]
    /// What: Bounded search stays under the ceiling.
    ///
    /// Inputs:
    /// - Black reference with ceiling 6.0.
    ///
    /// Output:
    /// - Results with `4.5 < ratio < 6.0`.
    fn bounded_search_respects_ceiling() {
        let mut rng = StdRng::seed_from_u64(42);
        let found =
            find_alternates("#000", 6.0, 5, &SearchPolicy::default(), &mut rng).unwrap();
        assert_eq!(found.len(), 5);
        for c in found {
            let ratio = contrast("#000", &c.to_string()).unwrap();
            assert!(ratio > 4.5 && ratio < 6.0, "{c} = {ratio}");
        }
    }

    #[test]
    /// What: Ceilings below the minimum are rejected before any draw.
    ///
    /// Inputs:
    /// - Ratios 4.0 and NaN with an RNG that panics when used.
    ///
    /// Output:
    /// - `InvalidRatioRequest` without touching the RNG.
    fn low_ceiling_rejected_without_draws() {
        let err = find_alternate("#fff", 4.0, &SearchPolicy::default(), &mut NoDraws).unwrap_err();
        assert_eq!(err, ContrastError::InvalidRatioRequest { requested: 4.0 });
        assert!(matches!(
            find_alternate("#fff", f64::NAN, &SearchPolicy::default(), &mut NoDraws),
            Err(ContrastError::InvalidRatioRequest { .. })
        ));
        assert!(matches!(
            find_alternate("#ff", 5.0, &SearchPolicy::default(), &mut NoDraws),
            Err(ContrastError::InvalidColorFormat { .. })
        ));
    }

    #[test]
    /// What: An empty acceptance window ends in `SearchExhausted`.
    ///
    /// Inputs:
    /// - Ceiling 4.5000001: no three-decimal ratio lies in `(4.5, 4.5000001)`; small cap.
    ///
    /// Output:
    /// - `SearchExhausted` reporting the cap.
    fn impossible_window_exhausts() {
        let mut rng = StdRng::seed_from_u64(1);
        let policy = SearchPolicy { max_attempts: 200 };
        assert_eq!(
            find_alternate("#777777", 4.500_000_1, &policy, &mut rng),
            Err(ContrastError::SearchExhausted { attempts: 200 })
        );
    }

    #[test]
    /// What: Seeded searches are reproducible.
    ///
    /// Inputs:
    /// - Two RNGs with the same seed.
    ///
    /// Output:
    /// - Identical suggestions.
    fn same_seed_same_result() {
        let policy = SearchPolicy::default();
        let a = find_alternate("#336699", 4.5, &policy, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = find_alternate("#336699", 4.5, &policy, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    /// What: Acceptance predicate edges.
    ///
    /// Inputs:
    /// - Ratios at and around 4.5 with open and closed ceilings.
    ///
    /// Output:
    /// - 4.5 itself never accepted; ceiling exclusive when set.
    fn acceptance_edges() {
        assert!(!accepts(4.5, 4.5));
        assert!(accepts(4.501, 4.5));
        assert!(accepts(21.0, 4.5));
        assert!(accepts(5.0, 6.0));
        assert!(!accepts(6.0, 6.0));
        assert!(!accepts(7.0, 6.0));
    }
}
