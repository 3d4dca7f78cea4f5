//! Tracing subscriber setup for the binary.

use std::fmt;
use std::sync::OnceLock;

/// Timestamp formatter for log lines (`YYYY-MM-DD-T HH:MM:SS`, local time).
struct ScanTimer;

impl tracing_subscriber::fmt::time::FormatTime for ScanTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

/// Keeps the non-blocking writer flushing until process exit.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Build the level filter from `RUST_LOG`, falling back to `level`.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// What: Initialize tracing to `<logs_dir>/contrastscan.log`.
///
/// Inputs:
/// - `level`: Default level when `RUST_LOG` is unset.
///
/// Output:
/// - None; installs the global subscriber.
///
/// Details:
/// - Falls back to an ANSI stderr logger when the log file cannot be opened.
pub fn init(level: &str) {
    let mut log_path = contrastscan::config::logs_dir();
    log_path.push("contrastscan.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(ScanTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(ScanTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}
