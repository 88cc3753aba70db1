//! Runtime configuration.
//!
//! Everything has a default; environment variables override:
//!
//! | Variable | Meaning |
//! |---|---|
//! | `MVG_API_BASE_URL` | API root, default [`DEFAULT_BASE_URL`] |
//! | `MVG_TIMEOUT_SECS` | HTTP timeout in seconds, default 30 |
//! | `MVG_FAVORITES_PATH` | favorites file, default `<config dir>/mvg-cli/favorites.json` |
//! | `NO_COLOR` | disable ANSI styling when set to anything non-empty |
//!
//! The config dir is the platform's per-user one from [`dirs::config_dir`].

use std::path::PathBuf;

use crate::mvg::{DEFAULT_BASE_URL, MvgConfig};

/// Directory under the config dir that holds our files.
const APP_DIR: &str = "mvg-cli";

const FAVORITES_FILE: &str = "favorites.json";

/// Errors building the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `MVG_TIMEOUT_SECS` isn't a whole number
    #[error("MVG_TIMEOUT_SECS must be a whole number of seconds, got '{0}'")]
    InvalidTimeout(String),

    /// Neither a favorites path nor a config directory is known
    #[error("cannot locate favorites file: set MVG_FAVORITES_PATH")]
    NoConfigDir,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API client settings
    pub mvg: MvgConfig,
    /// Favorites file location
    pub favorites_path: PathBuf,
    /// Whether styled output is allowed at all
    pub color: bool,
}

impl AppConfig {
    /// Defaults with the favorites file at `favorites_path`.
    pub fn new(favorites_path: impl Into<PathBuf>) -> Self {
        Self {
            mvg: MvgConfig::new(),
            favorites_path: favorites_path.into(),
            color: true,
        }
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), dirs::config_dir())
    }

    /// Build from an arbitrary variable lookup and per-user config dir.
    /// Empty values count as unset.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        config_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let favorites_path = match var("MVG_FAVORITES_PATH") {
            Some(path) => PathBuf::from(path),
            None => config_dir
                .ok_or(ConfigError::NoConfigDir)?
                .join(APP_DIR)
                .join(FAVORITES_FILE),
        };

        let mut config = Self::new(favorites_path).with_color(var("NO_COLOR").is_none());

        if let Some(url) = var("MVG_API_BASE_URL") {
            config = config.with_base_url(url);
        }

        if let Some(raw) = var("MVG_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            config = config.with_timeout(secs);
        }

        Ok(config)
    }

    /// Set a custom API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.mvg = self.mvg.with_base_url(url);
        self
    }

    /// Set the HTTP timeout in seconds.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.mvg = self.mvg.with_timeout(secs);
        self
    }

    /// Disable or enable styled output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
