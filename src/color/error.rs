use std::fmt;

/// What: Error type shared by colour parsing, contrast computation and the alternate search.
///
/// Inputs: Generated internally by the `color` and `search` routines.
///
/// Output: Implements `Display`/`Error` for ergonomic propagation.
///
/// Details:
/// - All variants are local and synchronous; nothing inside the crate retries them.
#[derive(Debug, Clone, PartialEq)]
pub enum ContrastError {
    /// The literal did not resolve to exactly 3 or 6 hexadecimal digits.
    InvalidColorFormat {
        /// Raw text that failed to parse.
        input: String,
    },
    /// A ratio ceiling below the legal minimum was requested.
    InvalidRatioRequest {
        /// Ceiling supplied by the caller.
        requested: f64,
    },
    /// The randomized search ran out of attempts without a compliant candidate.
    SearchExhausted {
        /// Number of candidates drawn before giving up.
        attempts: u64,
    },
}

impl fmt::Display for ContrastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorFormat { input } => {
                write!(f, "invalid colour {input:?} (use #RGB or #RRGGBB)")
            }
            Self::InvalidRatioRequest { requested } => write!(
                f,
                "requested contrast ratio {requested} is below the minimum of {}",
                super::MIN_COMPLIANT_RATIO
            ),
            Self::SearchExhausted { attempts } => {
                write!(f, "no compliant colour found after {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for ContrastError {}
