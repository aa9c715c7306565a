//! Configuration domain model.
//!
//! Contains the structure of `config.toml`. Loading and path resolution are
//! handled by `rmap_infrastructure::config_service`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::storage::APPLICATIONS_STORAGE_KEY;

/// Which key-value backend holds the application collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One file per key in the data directory.
    #[default]
    File,
    /// Process memory only; nothing survives a restart.
    Memory,
}

/// Storage section of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,
    /// Overrides the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_key() -> String {
    APPLICATIONS_STORAGE_KEY.to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: None,
            key: default_storage_key(),
        }
    }
}

/// Logging section of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Write to a daily rolling file instead of stderr.
    #[serde(default)]
    pub log_to_file: bool,
    /// Overrides the platform log directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_to_file: false,
            log_dir: None,
        }
    }
}

/// Root of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TrackerConfig {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl TrackerConfig {
    /// A configuration that keeps everything in memory.
    pub fn in_memory() -> Self {
        Self {
            storage: StorageSettings {
                backend: StorageBackend::Memory,
                ..StorageSettings::default()
            },
            logging: LoggingSettings::default(),
        }
    }
}
