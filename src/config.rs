//! Run configuration.
//!
//! All tunables live in an explicit struct passed into the engine and
//! rewriter at call time; there is no process-wide mutable state. Values come
//! from an optional TOML config file, overridden per-field by CLI flags.

use crate::error::{LinkerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_safe_mode() -> bool {
    true
}

fn default_acronym_min_len() -> usize {
    3
}

fn default_related_heading() -> String {
    "Related".to_string()
}

/// Notelink configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Vault to operate on when `--vault` is not given.
    #[serde(default)]
    pub default_vault: Option<PathBuf>,

    /// Snapshot the vault before mutating it. Disabling this accepts
    /// data-loss risk; the CLI warns at the start of the run.
    #[serde(default = "default_safe_mode")]
    pub safe_mode: bool,

    /// Minimum shared-key length for acronym-kind matches.
    #[serde(default = "default_acronym_min_len")]
    pub acronym_min_len: usize,

    /// Heading of the section links are inserted under.
    #[serde(default = "default_related_heading")]
    pub related_heading: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_vault: None,
            safe_mode: default_safe_mode(),
            acronym_min_len: default_acronym_min_len(),
            related_heading: default_related_heading(),
        }
    }
}

impl Config {
    /// Load configuration from the user config directory
    /// (`~/.config/notelink/config.toml` on Linux), falling back to defaults
    /// when no file exists.
    pub fn load() -> Result<Self> {
        match Self::config_file_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Default location of the config file, if a config directory exists.
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("notelink").join("config.toml"))
    }

    /// Resolve the vault path from CLI argument or config default.
    pub fn resolve_vault_path(&self, cli_vault: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = cli_vault {
            return Ok(path.to_path_buf());
        }
        if let Some(ref path) = self.default_vault {
            return Ok(path.clone());
        }
        Err(LinkerError::Config(
            "no vault specified: pass --vault or set default_vault in the config file".to_string(),
        ))
    }
}
