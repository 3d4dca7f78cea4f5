//! contrastscan binary entrypoint kept minimal. Scanning and search live in the library.

mod args;
mod logging;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let args = args::Args::parse();
    logging::init(&args::determine_log_level(&args));
    tracing::info!(path = %args.path.display(), "contrastscan starting");
    let code = args::process_args(&args);
    tracing::info!("contrastscan exited");
    code
}
