//! Loader configuration
//!
//! Read from `merchant-loader.toml` in the project root. Every key is
//! optional; a missing file means all defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name, relative to the project root
pub const CONFIG_FILE: &str = "merchant-loader.toml";

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config file: {0}")]
    Write(#[from] std::io::Error),
}

fn default_block_tag() -> String {
    "yml".to_string()
}

fn default_issues_dir() -> PathBuf {
    PathBuf::from("issues")
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Merchant loader configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Fence info string identifying the details block
    #[serde(default = "default_block_tag")]
    pub block_tag: String,

    /// Directory holding `<id>.json` issue files
    #[serde(default = "default_issues_dir")]
    pub issues_dir: PathBuf,

    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            block_tag: default_block_tag(),
            issues_dir: default_issues_dir(),
            log_level: default_log_level(),
        }
    }
}

impl LoaderConfig {
    /// Load config from `merchant-loader.toml`, falling back to defaults
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let config_path = project_root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
            path: config_path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: config_path,
            source,
        })
    }

    /// Save config to `merchant-loader.toml`
    pub fn save(&self, project_root: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::create_dir_all(project_root)?;
        std::fs::write(project_root.join(CONFIG_FILE), content)?;
        Ok(())
    }

    /// Resolve `issues_dir` against the project root when it is relative
    pub fn issues_dir_in(&self, project_root: &Path) -> PathBuf {
        if self.issues_dir.is_absolute() {
            self.issues_dir.clone()
        } else {
            project_root.join(&self.issues_dir)
        }
    }
}
