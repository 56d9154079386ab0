// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file support for orgscope
//!
//! Loads configuration from .orgscoperc.toml in current directory or ~/.config/orgscope/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default number of organizations listed by `search`
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Output format for results (mirrored from cli for library use)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration loaded from .orgscoperc.toml or ~/.config/orgscope/config.toml
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default organization snapshot (JSON array)
    pub data: Option<PathBuf>,
    /// Hierarchy file (TOML or JSON); the built-in Michigan table when unset
    pub hierarchy: Option<PathBuf>,
    /// Maximum number of organizations to list
    pub max_results: Option<usize>,
    /// Default output format (text or json)
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from files
    ///
    /// Precedence (highest to lowest):
    /// 1. .orgscoperc.toml in current directory
    /// 2. ~/.config/orgscope/config.toml
    pub fn load() -> Self {
        if let Some(config) = Self::load_from_path(Path::new(".orgscoperc.toml")) {
            return config;
        }

        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".config").join("orgscope").join("config.toml");
            if let Some(config) = Self::load_from_path(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    pub fn load_from_path(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse config");
                None
            }
        }
    }

    /// Get output format from config, parsing the string to ConfigOutputFormat
    pub fn output_format(&self) -> Option<ConfigOutputFormat> {
        self.default_format.as_ref().and_then(|s| match s.to_lowercase().as_str() {
            "json" => Some(ConfigOutputFormat::Json),
            "text" => Some(ConfigOutputFormat::Text),
            _ => None,
        })
    }

    /// Merge CLI options with config (CLI wins)
    pub fn merge_max_results(&self, cli_value: Option<usize>) -> usize {
        cli_value.or(self.max_results).unwrap_or(DEFAULT_MAX_RESULTS)
    }

    /// Snapshot path: CLI flag, then config
    pub fn merge_data(&self, cli_value: Option<&str>) -> Option<PathBuf> {
        cli_value.map(PathBuf::from).or_else(|| self.data.clone())
    }

    /// Hierarchy path: CLI flag, then config
    pub fn merge_hierarchy(&self, cli_value: Option<&str>) -> Option<PathBuf> {
        cli_value.map(PathBuf::from).or_else(|| self.hierarchy.clone())
    }
}
