//! Application repository trait.
//!
//! Defines the persistence contract the application store depends on.

use async_trait::async_trait;

use super::model::{Application, ApplicationData};

/// Whole-collection persistence for applications.
///
/// The collection is read and written as one unit. Implementations log and
/// swallow storage failures instead of returning them: a failed read yields
/// an empty collection and a failed write leaves the previous contents in
/// place. Callers therefore cannot tell "no data" from "unreadable data".
///
/// There is no locking between a load and the following save. Two overlapping
/// `upsert` calls race and the last write wins.
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Reads the full collection, or an empty one if absent or malformed.
    async fn load(&self) -> ApplicationData;

    /// Overwrites the stored collection.
    async fn save(&self, applications: &[Application]);

    /// Replaces the entry with the same `id` in place, or appends it, then
    /// saves and returns the new collection.
    async fn upsert(&self, application: Application) -> ApplicationData;

    /// Drops the entry with `id` (if any), saves and returns the new collection.
    async fn remove(&self, id: &str) -> ApplicationData;
}
