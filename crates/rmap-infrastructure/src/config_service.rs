//! Configuration service implementation.
//!
//! Loads `config.toml` from the configuration directory, writing a default
//! file on first use, and caches the result.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

use rmap_core::config::TrackerConfig;
use rmap_core::error::Result;

use crate::paths::TrackerPaths;
use crate::storage::AtomicTomlFile;

/// Configuration service that loads and caches the root configuration.
#[derive(Clone)]
pub struct ConfigService {
    file: Arc<AtomicTomlFile<TrackerConfig>>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<TrackerConfig>>>,
}

impl ConfigService {
    /// Creates a service for the default config location.
    pub fn new() -> Result<Self> {
        let path = TrackerPaths::new(None).config_file()?;
        Ok(Self::with_path(path))
    }

    /// Creates a service for a custom config file (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicTomlFile::new(path)),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.file.path().to_path_buf()
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// An unreadable file yields the defaults; the file is left as is.
    pub fn get_config(&self) -> TrackerConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(|p| p.into_inner());
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_or_create().unwrap_or_else(|e| {
            warn!("Failed to load config from {:?}, using defaults: {}", self.path(), e);
            TrackerConfig::default()
        });

        let mut write_lock = self.config.write().unwrap_or_else(|p| p.into_inner());
        *write_lock = Some(loaded.clone());
        loaded
    }

    /// Persists `config` and refreshes the cache.
    pub fn save_config(&self, config: &TrackerConfig) -> Result<()> {
        self.file.update(TrackerConfig::default(), |current| {
            *current = config.clone();
            Ok(())
        })?;

        let mut write_lock = self.config.write().unwrap_or_else(|p| p.into_inner());
        *write_lock = Some(config.clone());
        Ok(())
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|p| p.into_inner());
        *write_lock = None;
    }

    fn load_or_create(&self) -> Result<TrackerConfig> {
        if let Some(config) = self.file.load()? {
            return Ok(config);
        }

        let default_config = TrackerConfig::default();
        self.file.save(&default_config)?;
        info!("Created default config at {:?}", self.path());
        Ok(default_config)
    }
}
