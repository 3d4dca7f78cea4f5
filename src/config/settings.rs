use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::{ContrastError, HexColor};
use crate::scan::ScanOptions;
use crate::search::{DEFAULT_MAX_ATTEMPTS, SearchPolicy};

/// What: User settings read from `settings.toml`.
///
/// Inputs: Deserialized with `toml`; every key is optional.
///
/// Output: Feeds [`ScanOptions`], [`SearchPolicy`] and the directory walker.
///
/// Details:
/// - Unknown keys are ignored so older binaries tolerate newer files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Partner colour for rules that declare a single colour.
    pub default_pair_color: String,
    /// Attempt ceiling for the alternate colour search.
    pub max_attempts: u64,
    /// File extensions (without dot) scanned by the directory walker.
    pub extensions: Vec<String>,
    /// Seed for a reproducible search; random when absent.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_pair_color: "#000".to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            extensions: vec!["html".to_string()],
            seed: None,
        }
    }
}

impl Settings {
    /// What: Scan options derived from these settings.
    ///
    /// # Errors
    /// - `ContrastError::InvalidColorFormat` when `default_pair_color` is malformed.
    pub fn scan_options(&self) -> Result<ScanOptions, ContrastError> {
        Ok(ScanOptions {
            default_pair: HexColor::parse(&self.default_pair_color)?,
        })
    }

    /// Search policy derived from these settings.
    #[must_use]
    pub const fn search_policy(&self) -> SearchPolicy {
        SearchPolicy {
            max_attempts: self.max_attempts,
        }
    }

    /// What: Whether `path` has one of the configured extensions (case-insensitive).
    #[must_use]
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
    }
}

/// What: Failure while loading the settings file.
///
/// Output: Implements `Display`/`Error` with the underlying cause as `source()`.
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read.
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// File is not valid TOML for [`Settings`].
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read settings {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid settings {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// What: Parse settings from TOML text.
///
/// Inputs:
/// - `text`: File contents.
/// - `path`: Used only for error messages.
///
/// Output:
/// - Parsed settings with defaults for missing keys.
///
/// # Errors
/// - `ConfigError::Parse` on malformed TOML or mistyped values.
pub fn parse_settings(text: &str, path: &Path) -> Result<Settings, ConfigError> {
    toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// What: Read and parse a settings file.
///
/// # Errors
/// - `ConfigError::Io` when the file cannot be read.
/// - `ConfigError::Parse` when its contents are invalid.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&text, path)?;
    tracing::debug!(path = %path.display(), ?settings, "settings loaded");
    Ok(settings)
}
