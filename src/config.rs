//! Configuration loading for privscan
//!
//! Supports TOML configuration with embedded defaults.

use crate::error::{Error, Result};

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default input size limit (10 MiB)
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 10 * 1024 * 1024;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable cards
    #[default]
    Text,

    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Scanning configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Inputs larger than this are rejected before scanning
    pub max_input_bytes: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

/// Output configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: OutputFormat,

    /// Exit with failure when severity reaches this value (0 = never)
    pub fail_on: u8,

    /// Show advice under each match in text output
    pub advice: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            fail_on: 0,
            advice: true,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Standard config locations, most specific first
    pub fn search_paths() -> Vec<PathBuf> {
        [
            // User-specific config
            dirs::home_dir().map(|p| p.join(".privscan/config.toml")),
            // System-wide config
            Some(PathBuf::from("/etc/privscan/config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load configuration from the first standard location that parses, or
    /// use defaults
    pub fn load() -> Self {
        for path in Self::search_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from(&path) {
                Ok(config) => {
                    tracing::debug!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => tracing::warn!("{}", e),
            }
        }

        Config::default()
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            name: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[scan]
max_input_bytes = 10485760

[output]
format = "text"
fail_on = 0
advice = true
"#;
