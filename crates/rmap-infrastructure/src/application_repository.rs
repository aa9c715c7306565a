//! Application repository over a key-value store.
//!
//! The whole collection is one JSON array stored under a single key. Every
//! mutation is a load-modify-save of that array.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, warn};

use rmap_core::application::{Application, ApplicationData, ApplicationRepository};
use rmap_core::storage::{APPLICATIONS_STORAGE_KEY, KeyValueStore};

pub struct KeyValueApplicationRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl KeyValueApplicationRepository {
    /// Creates a repository using the default storage key.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, APPLICATIONS_STORAGE_KEY)
    }

    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[async_trait]
impl ApplicationRepository for KeyValueApplicationRepository {
    async fn load(&self) -> ApplicationData {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored applications under '{}'", self.key);
                return Vec::new();
            }
            Err(e) => {
                error!("Failed to load applications: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<ApplicationData>(&raw) {
            Ok(applications) => {
                debug!("Loaded {} applications", applications.len());
                applications
            }
            Err(e) => {
                warn!(
                    "Stored applications under '{}' are malformed, treating as empty: {}",
                    self.key, e
                );
                Vec::new()
            }
        }
    }

    async fn save(&self, applications: &[Application]) {
        let json = match serde_json::to_string(applications) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize applications: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.set(&self.key, &json).await {
            error!("Failed to save applications: {}", e);
        }
    }

    async fn upsert(&self, application: Application) -> ApplicationData {
        let mut applications = self.load().await;

        match applications.iter().position(|app| app.id == application.id) {
            Some(index) => applications[index] = application,
            None => applications.push(application),
        }

        self.save(&applications).await;
        applications
    }

    async fn remove(&self, id: &str) -> ApplicationData {
        let mut applications = self.load().await;
        applications.retain(|app| app.id != id);

        self.save(&applications).await;
        applications
    }
}
