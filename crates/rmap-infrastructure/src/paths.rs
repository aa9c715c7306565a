//! Unified path management for Rejection Mapper files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/rejection-mapper/      # Config directory
//! └── config.toml                  # Application configuration
//!
//! ~/.local/share/rejection-mapper/ # Data directory
//! ├── store/                       # FileKeyValueStore entries
//! └── logs/                        # Rolling log files
//!     └── rejection-mapper.log.YYYY-MM-DD
//! ```
//!
//! Platform directories come from the `dirs` crate (XDG on Linux, the
//! Library folders on macOS, AppData on Windows).

use std::path::PathBuf;

use rmap_core::error::{Result, TrackerError};

const APP_DIR_NAME: &str = "rejection-mapper";

/// Path resolver.
///
/// With a base override every directory lives under that base, which keeps
/// tests away from the real user directories.
#[derive(Debug, Clone, Default)]
pub struct TrackerPaths {
    base: Option<PathBuf>,
}

impl TrackerPaths {
    pub fn new(base: Option<PathBuf>) -> Self {
        Self { base }
    }

    /// Configuration directory (e.g. `~/.config/rejection-mapper/`).
    pub fn config_dir(&self) -> Result<PathBuf> {
        match &self.base {
            Some(base) => Ok(base.join("config")),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or_else(|| TrackerError::config("Cannot find config directory")),
        }
    }

    /// Data directory (e.g. `~/.local/share/rejection-mapper/`).
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.base {
            Some(base) => Ok(base.join("data")),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or_else(|| TrackerError::config("Cannot find data directory")),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Directory holding one file per key-value entry.
    pub fn store_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("store"))
    }

    pub fn log_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_override() {
        let paths = TrackerPaths::new(Some(PathBuf::from("/tmp/rmap")));
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/rmap/config/config.toml")
        );
        assert_eq!(
            paths.store_dir().unwrap(),
            PathBuf::from("/tmp/rmap/data/store")
        );
        assert_eq!(paths.log_dir().unwrap(), PathBuf::from("/tmp/rmap/data/logs"));
    }
}
