//! Configuration module for lemmydl

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::paths;

/// Settings read from `config.toml`.
///
/// Every key is optional; command-line flags override whatever is set here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Account name or email used to log in
    #[serde(default)]
    pub username: Option<String>,

    /// Account password
    #[serde(default)]
    pub password: Option<String>,

    /// Shell command printing the password on stdout (e.g. `pass show lemmy`)
    #[serde(default)]
    pub password_command: Option<String>,

    /// Instance URL or host (e.g. `lemmy.world`)
    #[serde(default)]
    pub instance: Option<String>,

    /// Where archives are written (`~` is expanded)
    #[serde(default)]
    pub output_dir: Option<String>,

    /// Keep titles as-is instead of reducing them to slugs
    #[serde(default)]
    pub dont_clean_text: bool,

    /// Fetch every post of the community instead of `--number`
    #[serde(default)]
    pub get_max: bool,

    /// Seconds between API requests
    #[serde(default)]
    pub request_delay: Option<f64>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        paths::config_path()
    }

    /// Load config from the default path, or defaults when there is no file
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load config from an explicitly requested path, which must exist
    pub fn load_required(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::ConfigNotFound(path.to_path_buf()).into());
        }
        Self::load_from(path)
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config file contents
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }
}
