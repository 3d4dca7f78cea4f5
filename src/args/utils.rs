//! Shared utilities for argument processing.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Build the random source for alternate colour searches.
///
/// Inputs:
/// - `seed`: Fixed seed for reproducible output, or `None` for OS entropy.
///
/// Output:
/// - Generator owned by the caller; never shared between searches running in parallel.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// What: Print a prompt and read one trimmed line.
///
/// Inputs:
/// - `input`: Line source (stdin in production).
/// - `output`: Prompt sink (stdout in production).
/// - `message`: Prompt text.
///
/// Output:
/// - `Ok(Some(line))` with surrounding whitespace removed, `Ok(None)` at end of input.
///
/// # Errors
/// - Writing the prompt or reading the answer failed.
pub fn prompt_line<R: std::io::BufRead, W: std::io::Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
