//! Configuration handling for asana-deps
//!
//! Configuration is read from `--config <path>` when given, otherwise from
//! `config.toml` in the platform config directory
//! (`~/.config/asana-deps/config.toml` on Linux). A missing file means
//! defaults.
//!
//! ```toml
//! default_dialect = "mermaid"
//!
//! [api]
//! base_url = "https://app.asana.com/api/1.0"
//! timeout_secs = 30
//! token = "1/1234:abcd"
//! keyring = true
//!
//! [graphviz]
//! milestone = "darkgreen"
//! completed = "gray"
//!
//! [mermaid]
//! milestone_stroke = "darkgreen"
//! milestone_fill = "darkseagreen"
//! completed = "lightgray"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::{Dialect, GraphvizPalette, MermaidPalette};

pub const DEFAULT_BASE_URL: &str = "https://app.asana.com/api/1.0";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Settings for the Asana API client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Root of the REST API
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Personal access token, used when neither flag, env var nor keyring
    /// entry is set
    pub token: Option<String>,

    /// Look the token up in the system keyring
    pub keyring: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            token: None,
            keyring: true,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Dialect used by `graph` when no flag picks one
    pub default_dialect: Dialect,

    pub api: ApiConfig,

    pub graphviz: GraphvizPalette,

    pub mermaid: MermaidPalette,
}

impl Config {
    /// Loads from an explicit path, or the default location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Returns the default config file path
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "asana-deps", "asana-deps")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Parses a config file that must exist
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
