//! Configuration system for pathlite.
//!
//! Settings are read from `~/.config/pathlite/config.toml`. Every field is
//! optional in the file; missing fields take their defaults, and an unreadable
//! or malformed file falls back to `Config::default()`.
//!
//! # Example
//!
//! ```
//! use pathlite::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.output_format, "yaml");
//! assert_eq!(config.cache_capacity, 256);
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the pathlite command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output format for matches: "yaml" or "json"
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Number of compiled expressions kept in the path cache
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Print only the first match
    #[serde(default)]
    pub first_only: bool,
}

fn default_output_format() -> String {
    "yaml".to_string()
}

fn default_cache_capacity() -> usize {
    crate::cache::DEFAULT_CAPACITY
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            cache_capacity: default_cache_capacity(),
            first_only: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/pathlite/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("pathlite");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from a specific file, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("ignoring invalid config {}: {}", path.display(), err);
                Self::default()
            }),
            Err(err) => {
                log::warn!("could not read config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Returns true when matches should be printed as JSON.
    pub fn json_output(&self) -> bool {
        self.output_format.eq_ignore_ascii_case("json")
    }
}
