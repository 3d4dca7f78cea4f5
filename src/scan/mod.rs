//! Compliance classification of extracted class colours.

use serde::Serialize;
use tracing::debug;

use crate::color::{ContrastError, HexColor, MIN_COMPLIANT_RATIO, contrast_between};
use crate::style::StyleMap;

/// What: Knobs for the compliance scan.
///
/// Details:
/// - `default_pair` stands in for the undeclared partner of a single-colour rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Colour paired with rules that declare only one colour.
    pub default_pair: HexColor,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            default_pair: HexColor::BLACK,
        }
    }
}

/// Outcome for one selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// A pair was formed and measured.
    Evaluated {
        /// Colours actually compared (second is the default partner for single-colour rules).
        pair: [HexColor; 2],
        /// Rounded contrast ratio.
        ratio: f64,
        /// Whether `ratio` reaches [`MIN_COMPLIANT_RATIO`].
        compliant: bool,
    },
    /// Zero or more than two colours; not evaluated.
    Skipped,
}

/// One selector's line in a [`ComplianceReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    /// Class selector without the leading dot.
    pub selector: String,
    /// Raw colour literals captured for the selector.
    pub colors: Vec<String>,
    /// Classification.
    #[serde(flatten)]
    pub verdict: Verdict,
}

impl ReportEntry {
    /// Whether this entry was evaluated and failed.
    #[must_use]
    pub const fn is_non_compliant(&self) -> bool {
        matches!(
            self.verdict,
            Verdict::Evaluated {
                compliant: false,
                ..
            }
        )
    }
}

/// What: Per-document mapping from selector to verdict.
///
/// Output: Entries in the same order as the input [`StyleMap`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComplianceReport {
    /// Entries in selector order.
    pub entries: Vec<ReportEntry>,
}

impl ComplianceReport {
    /// Entries that were evaluated and failed.
    pub fn non_compliant(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.is_non_compliant())
    }

    /// Whether every evaluated entry passed.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.non_compliant().next().is_none()
    }
}

/// What: Classify one selector's colour list.
///
/// Inputs:
/// - `colors`: Raw literals in source order.
/// - `options`: Supplies the default partner for single-colour lists.
///
/// Output:
/// - `Verdict::Evaluated` for one or two colours, `Verdict::Skipped` otherwise.
///
/// # Errors
/// - `ContrastError::InvalidColorFormat` when a literal does not parse.
pub fn evaluate(colors: &[String], options: &ScanOptions) -> Result<Verdict, ContrastError> {
    let pair = match colors {
        [fg, bg] => [HexColor::parse(fg)?, HexColor::parse(bg)?],
        [only] => [HexColor::parse(only)?, options.default_pair],
        _ => return Ok(Verdict::Skipped),
    };
    let ratio = contrast_between(pair[0], pair[1]);
    Ok(Verdict::Evaluated {
        pair,
        ratio,
        compliant: ratio >= MIN_COMPLIANT_RATIO,
    })
}

/// What: Build the full compliance report for an extracted style map.
///
/// Inputs:
/// - `pairs`: Output of the style extractor.
/// - `options`: Scan settings.
///
/// Output:
/// - One entry per selector, in input order.
///
/// # Errors
/// - The first `InvalidColorFormat` encountered; no partial report is returned.
pub fn build_report(
    pairs: &StyleMap,
    options: &ScanOptions,
) -> Result<ComplianceReport, ContrastError> {
    let mut entries = Vec::with_capacity(pairs.len());
    for (selector, colors) in pairs.iter() {
        let verdict = evaluate(colors, options)?;
        debug!(selector, ?verdict, "evaluated selector");
        entries.push(ReportEntry {
            selector: selector.to_string(),
            colors: colors.to_vec(),
            verdict,
        });
    }
    Ok(ComplianceReport { entries })
}

/// What: Return only the non-compliant selectors with their captured colours.
///
/// Inputs:
/// - `pairs`: Output of the style extractor.
/// - `options`: Scan settings.
///
/// Output:
/// - `(selector, colours)` in input order; empty when everything evaluated passes.
///
/// # Errors
/// - `ContrastError::InvalidColorFormat` from any evaluated literal.
pub fn scan(
    pairs: &StyleMap,
    options: &ScanOptions,
) -> Result<Vec<(String, Vec<String>)>, ContrastError> {
    let report = build_report(pairs, options)?;
    Ok(report
        .entries
        .into_iter()
        .filter(ReportEntry::is_non_compliant)
        .map(|e| (e.selector, e.colors))
        .collect())
}
