//! Composition root.
//!
//! Builds the key-value backend named by the configuration, wraps it in the
//! application repository and hands back an initialized store. The UI host
//! owns the returned `Arc<ApplicationStore>` and passes it to whatever needs
//! it.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use rmap_core::application::ApplicationRepository;
use rmap_core::config::{StorageBackend, StorageSettings, TrackerConfig};
use rmap_core::storage::KeyValueStore;
use rmap_infrastructure::{
    ConfigService, FileKeyValueStore, InMemoryKeyValueStore, KeyValueApplicationRepository,
    TrackerPaths,
};

use crate::store::ApplicationStore;
use crate::telemetry;

pub struct AppBootstrap {
    pub store: Arc<ApplicationStore>,
    pub config: TrackerConfig,
}

/// Boots from `config.toml` in the platform config directory, installing
/// tracing along the way.
pub async fn bootstrap_default() -> Result<AppBootstrap> {
    let config_service = ConfigService::new().context("Failed to resolve config path")?;
    let config = config_service.get_config();
    telemetry::init_tracing(&config.logging)?;
    bootstrap(config).await
}

/// Boots from an explicit configuration. Tracing is left to the caller.
pub async fn bootstrap(config: TrackerConfig) -> Result<AppBootstrap> {
    let kv_store = build_key_value_store(&config.storage)?;
    let repository: Arc<dyn ApplicationRepository> = Arc::new(
        KeyValueApplicationRepository::with_key(kv_store, config.storage.key.clone()),
    );

    let store = Arc::new(ApplicationStore::new(repository));
    store.init().await;

    info!(
        "[Bootstrap] Application store initialized ({:?} backend)",
        config.storage.backend
    );

    Ok(AppBootstrap { store, config })
}

fn build_key_value_store(settings: &StorageSettings) -> Result<Arc<dyn KeyValueStore>> {
    match settings.backend {
        StorageBackend::Memory => Ok(Arc::new(InMemoryKeyValueStore::new())),
        StorageBackend::File => {
            let paths = TrackerPaths::new(None);
            let base_dir = match &settings.data_dir {
                Some(dir) => dir.join("store"),
                None => paths
                    .store_dir()
                    .context("Failed to resolve data directory")?,
            };
            info!("[Bootstrap] Using file storage at {:?}", base_dir);
            Ok(Arc::new(FileKeyValueStore::with_base_dir(base_dir)))
        }
    }
}
