//! Settings file and directory layout.

/// Path resolution for config and log directories.
mod paths;
/// Settings parsing.
mod settings;

pub use paths::{config_dir, logs_dir, resolve_settings_path, settings_path};
pub use settings::{ConfigError, Settings, load_settings, parse_settings};
