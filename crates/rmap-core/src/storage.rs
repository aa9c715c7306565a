//! Key-value storage trait.
//!
//! The persistence adapter only needs a flat string store. Backends live in
//! the infrastructure crate (in-memory and on-disk).

use async_trait::async_trait;

use crate::error::Result;

/// Storage key under which the whole application collection is kept.
pub const APPLICATIONS_STORAGE_KEY: &str = "@RejectionMapper:Applications";

/// A flat string-to-string store.
///
/// Every call may fail. Callers decide whether a failure is fatal; the
/// application repository treats all of them as recoverable.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if nothing is stored.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}
