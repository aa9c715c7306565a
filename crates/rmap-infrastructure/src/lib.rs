//! Infrastructure layer: key-value backends, the application repository,
//! atomic file storage, path resolution and configuration loading.

pub mod application_repository;
pub mod config_service;
pub mod kv;
pub mod paths;
pub mod storage;

pub use crate::application_repository::KeyValueApplicationRepository;
pub use crate::config_service::ConfigService;
pub use crate::kv::{FileKeyValueStore, InMemoryKeyValueStore};
pub use crate::paths::TrackerPaths;
