use std::env;
use std::path::{Path, PathBuf};

/// Application directory name under the XDG bases.
const APP_DIR: &str = "contrastscan";
/// Settings file name inside the config directory.
const SETTINGS_FILE: &str = "settings.toml";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    resolve_base(
        env::var(var).ok().as_deref(),
        env::var("HOME").ok().as_deref(),
        home_default,
    )
}

/// What: Pure core of [`xdg_base_dir`].
///
/// Details:
/// - A blank `xdg` value counts as unset; a missing `home` falls back to `.`.
fn resolve_base(xdg: Option<&str>, home: Option<&str>, home_default: &[&str]) -> PathBuf {
    if let Some(p) = xdg
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    home_default
        .iter()
        .fold(PathBuf::from(home.unwrap_or(".")), |base, seg| base.join(seg))
}

/// Config directory: `$XDG_CONFIG_HOME/contrastscan` or `~/.config/contrastscan`. Not created.
#[must_use]
pub fn config_dir() -> PathBuf {
    xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR)
}

/// Default settings file location. May not exist.
#[must_use]
pub fn settings_path() -> PathBuf {
    config_dir().join(SETTINGS_FILE)
}

/// Logs directory: `$XDG_STATE_HOME/contrastscan/logs` or `~/.local/state/contrastscan/logs` (ensured to exist)
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = xdg_base_dir("XDG_STATE_HOME", &[".local", "state"])
        .join(APP_DIR)
        .join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// What: Pick the settings file to load.
///
/// Inputs:
/// - `explicit`: Path given on the command line, if any.
///
/// Output:
/// - `explicit` when given; otherwise the default path when it is a file; `None` otherwise.
#[must_use]
pub fn resolve_settings_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    Some(settings_path()).filter(|p| p.is_file())
}
