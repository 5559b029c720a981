//! escalafon configuration.
//!
//! Loaded from `~/.escalafon/config.toml` when present; every field has
//! a default, so no config file is required.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// escalafon configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Where the roster data lives.
    /// Defaults to `~/.escalafon/data/` when unset.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Load config from `~/.escalafon/config.toml`.
    /// A missing file yields the defaults; an invalid one is an error.
    pub fn load() -> Result<Self, String> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.escalafon/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".escalafon").join("config.toml"))
    }
}
