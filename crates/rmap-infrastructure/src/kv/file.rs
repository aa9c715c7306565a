//! On-disk key-value backend.
//!
//! Each key is one file under the base directory. File names are the key with
//! every byte outside `[A-Za-z0-9._-]` written as `%XX`, so distinct keys
//! never share a file. Writes are atomic and serialized by a lock file.

use async_trait::async_trait;
use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};
use tracing::debug;

use rmap_core::error::{Result, TrackerError};
use rmap_core::storage::KeyValueStore;

use crate::paths::TrackerPaths;
use crate::storage::{FileLock, read_optional, write_atomic};

pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    const EXTENSION: &'static str = "value";

    /// Creates a store in the default data directory.
    pub fn new() -> Result<Self> {
        let base_dir = TrackerPaths::new(None).store_dir()?;
        Ok(Self::with_base_dir(base_dir))
    }

    /// Creates a store rooted at a custom directory.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// File that holds the value for `key`.
    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.base_dir
            .join(format!("{}.{}", encode_key(key), Self::EXTENSION))
    }
}

fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'_' | b'-') {
            encoded.push(byte as char);
        } else {
            // Writing to a String cannot fail.
            let _ = write!(encoded, "%{:02X}", byte);
        }
    }
    encoded
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| TrackerError::internal(format!("Storage task failed: {}", e)))?
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        debug!("Reading key '{}' from {:?}", key, path);
        run_blocking(move || read_optional(&path)).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key);
        let value = value.to_string();
        debug!("Writing {} bytes for key '{}' to {:?}", value.len(), key, path);
        run_blocking(move || {
            let _lock = FileLock::acquire(&path)?;
            write_atomic(&path, &value)
        })
        .await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key);
        run_blocking(move || {
            let _lock = FileLock::acquire(&path)?;
            match std::fs::remove_file(&path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        })
        .await
    }
}
