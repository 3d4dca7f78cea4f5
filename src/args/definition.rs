//! Command-line argument definition and processing.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use contrastscan::config::{self, Settings};
use contrastscan::{HexColor, MIN_COMPLIANT_RATIO};

/// contrastscan - find WCAG contrast failures in HTML stylesheets and suggest fixes
#[derive(Parser, Debug)]
#[command(name = "contrastscan")]
#[command(version)]
#[command(about = "Find WCAG contrast failures in HTML stylesheets and suggest compliant colours", long_about = None)]
pub struct Args {
    /// Directory (or single file) to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Suggest a compliant partner for this colour instead of scanning (e.g. --alternate "#777")
    #[arg(short, long, value_name = "COLOR")]
    pub alternate: Option<String>,

    /// Upper bound on the suggested pairing's contrast ratio (must be at least 4.5)
    #[arg(short, long, default_value_t = MIN_COMPLIANT_RATIO)]
    pub ratio: f64,

    /// Number of suggestions to print with --alternate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible suggestions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Colour paired with rules that declare only one colour (default: #000)
    #[arg(long, value_name = "COLOR")]
    pub default_color: Option<String>,

    /// Give up on a suggestion after this many random candidates
    #[arg(long)]
    pub max_attempts: Option<u64>,

    /// Settings file (default: ~/.config/contrastscan/settings.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print scan results as JSON
    #[arg(long)]
    pub json: bool,

    /// After scanning, prompt for colours to find alternatives for
    #[arg(short, long)]
    pub interactive: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Merge the settings file with command-line overrides.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Effective settings.
///
/// Details:
/// - A missing default settings file is silent; an unreadable or invalid one is logged and
///   replaced by defaults.
pub fn effective_settings(args: &Args) -> Settings {
    let mut settings = match config::resolve_settings_path(args.config.as_deref()) {
        Some(path) => config::load_settings(&path).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "using default settings");
            eprintln!("warning: {err}; using defaults");
            Settings::default()
        }),
        None => Settings::default(),
    };
    if let Some(color) = &args.default_color {
        settings.default_pair_color.clone_from(color);
    }
    if let Some(n) = args.max_attempts {
        settings.max_attempts = n;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    settings
}

/// What: Run the mode selected on the command line.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Process exit code.
///
/// Details:
/// - `--alternate` skips scanning; otherwise the path is scanned and, with `--interactive`,
///   the prompt loop follows.
pub fn process_args(args: &Args) -> ExitCode {
    use crate::args::{alternate, interactive, scan};

    let settings = effective_settings(args);
    if let Err(err) = HexColor::parse(&settings.default_pair_color) {
        eprintln!("error: default colour: {err}");
        return ExitCode::FAILURE;
    }

    if let Some(color) = &args.alternate {
        return alternate::handle_alternate(color, args.ratio, args.count, &settings);
    }

    let code = scan::handle_scan(&args.path, &settings, args.json);
    if args.interactive {
        interactive::handle_interactive(&settings);
    }
    code
}
