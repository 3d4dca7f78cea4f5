//! Alternate colour suggestion mode.

use std::process::ExitCode;

use contrastscan::config::Settings;
use contrastscan::search::find_alternates;

use crate::args::utils::make_rng;

/// What: Print `count` compliant partners for `color`.
///
/// Inputs:
/// - `color`: Reference colour literal.
/// - `ratio`: Contrast ceiling (4.5 = unbounded).
/// - `count`: Number of suggestions.
/// - `settings`: Supplies the attempt cap and optional seed.
///
/// Output:
/// - `SUCCESS` after printing the suggestions, `FAILURE` after printing the error.
pub fn handle_alternate(color: &str, ratio: f64, count: usize, settings: &Settings) -> ExitCode {
    tracing::info!(color, ratio, count, "alternate colour requested");
    let mut rng = make_rng(settings.seed);
    match find_alternates(color, ratio, count, &settings.search_policy(), &mut rng) {
        Ok(found) => {
            for c in found {
                println!("{c}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::warn!(color, ratio, error = %err, "alternate search failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
