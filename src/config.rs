//! Configuration types for ladder-book

use crate::telemetry::LogFormat;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Root configuration structure
///
/// Every section is optional; an empty file yields [`Config::default`].
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub io: IoConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Engine run configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// What to do when a record fails to decode or a best-price query
    /// hits an empty ladder
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

/// Handling of per-record failures during a run
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the run at the first failure, keeping results already written
    #[default]
    Abort,
    /// Log the failure and continue with the next record
    Skip,
}

/// Input/output configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct IoConfig {
    /// Buffer size for the command reader and result writer, never zero
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: NonZeroUsize,
}

fn default_buffer_capacity() -> NonZeroUsize {
    NonZeroUsize::new(8 * 1024).unwrap_or(NonZeroUsize::MIN)
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Write a Prometheus text snapshot here when the run ends
    #[serde(default)]
    pub metrics_snapshot: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            metrics_snapshot: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Configuration shipped in `config.toml.example`
    pub fn embedded() -> anyhow::Result<Self> {
        let config: Config = toml::from_str(include_str!("../config.toml.example"))?;
        Ok(config)
    }
}
