//! Application store.
//!
//! The authoritative in-memory view of the application collection. Every
//! mutation goes through the repository and the cache is then replaced by the
//! collection the repository returns, so the cache always mirrors what was
//! persisted rather than a separately computed copy.
//!
//! Calls are expected to be serialized by the caller (one user action at a
//! time). Overlapping mutations of the same application race inside the
//! repository and the last write wins.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use rmap_core::application::{
    Application, ApplicationData, ApplicationRepository, INITIAL_STAGE_NOTES, Stage,
    initial_stage_name as default_stage_name,
};
use rmap_core::flow::{self, FlowGraph};
use rmap_core::suggestion;

/// Lifecycle of an [`ApplicationStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// Created, nothing loaded yet.
    Uninitialized,
    /// A load is in flight.
    Loading,
    /// The cache holds the last loaded or written collection.
    Ready,
    /// `teardown` was called; mutations are ignored until `init` runs again.
    TornDown,
}

struct StoreInner {
    state: StoreState,
    applications: ApplicationData,
}

pub struct ApplicationStore {
    repository: Arc<dyn ApplicationRepository>,
    inner: RwLock<StoreInner>,
}

impl ApplicationStore {
    /// Creates an uninitialized store. Call [`ApplicationStore::init`] before use.
    pub fn new(repository: Arc<dyn ApplicationRepository>) -> Self {
        Self {
            repository,
            inner: RwLock::new(StoreInner {
                state: StoreState::Uninitialized,
                applications: Vec::new(),
            }),
        }
    }

    /// Loads the collection into the cache.
    pub async fn init(&self) {
        self.inner.write().await.state = StoreState::Loading;

        let applications = self.repository.load().await;
        info!("Application store ready with {} applications", applications.len());

        let mut inner = self.inner.write().await;
        inner.applications = applications;
        inner.state = StoreState::Ready;
    }

    /// Reloads from storage, picking up changes written through another view.
    pub async fn force_refresh(&self) {
        debug!("Refreshing application store");
        self.init().await;
    }

    /// Drops the cache. Reads return nothing until `init` is called again.
    pub async fn teardown(&self) {
        let mut inner = self.inner.write().await;
        inner.applications.clear();
        inner.state = StoreState::TornDown;
        info!("Application store torn down");
    }

    pub async fn state(&self) -> StoreState {
        self.inner.read().await.state
    }

    pub async fn is_loading(&self) -> bool {
        self.state().await == StoreState::Loading
    }

    /// Snapshot of the cached collection.
    pub async fn applications(&self) -> ApplicationData {
        self.inner.read().await.applications.clone()
    }

    /// Creates an application seeded with the default first stage.
    ///
    /// When `initial_stage_name` is given and differs from the default stage,
    /// a second stage with that name is added on the same date.
    pub async fn add_application(
        &self,
        company_name: &str,
        channel: &str,
        job_title: &str,
        application_date: &str,
        initial_stage_name: Option<&str>,
        initial_stage_notes: Option<&str>,
    ) -> Option<Application> {
        if !self.accepts_mutations().await {
            return None;
        }

        let mut application = Application::new(
            Uuid::new_v4().to_string(),
            company_name,
            channel,
            job_title,
            application_date,
        );

        let default_stage = Stage::new(
            default_stage_name(),
            application_date,
            Some(INITIAL_STAGE_NOTES.to_string()),
        );
        let default_name = default_stage.name.clone();
        application.push_stage(default_stage);

        if let Some(name) = initial_stage_name.filter(|n| !n.is_empty() && *n != default_name) {
            application.push_stage(Stage::new(
                name,
                application_date,
                initial_stage_notes.map(str::to_string),
            ));
        }

        debug!("Adding application {} ({})", application.id, company_name);
        let updated = self.repository.upsert(application.clone()).await;
        self.replace_cache(updated).await;
        Some(application)
    }

    /// Replaces a whole record. The caller supplies the complete record.
    pub async fn update_application(&self, application: Application) {
        if !self.accepts_mutations().await {
            return;
        }

        debug!("Updating application {}", application.id);
        let updated = self.repository.upsert(application).await;
        self.replace_cache(updated).await;
    }

    /// Adds a stage to a cached application and restores date order.
    ///
    /// Returns the updated record, or `None` when `id` is not in the cache.
    pub async fn add_stage(
        &self,
        id: &str,
        stage_name: &str,
        stage_date: &str,
        stage_notes: Option<&str>,
    ) -> Option<Application> {
        let Some(mut application) = self.get_application_by_id(id).await else {
            warn!("Application with ID {} not found.", id);
            return None;
        };

        application.push_stage(Stage::new(
            stage_name,
            stage_date,
            stage_notes.map(str::to_string),
        ));

        self.update_application(application.clone()).await;
        Some(application)
    }

    /// Permanently removes an application. Unknown ids are a no-op.
    pub async fn delete_application(&self, id: &str) {
        if !self.accepts_mutations().await {
            return;
        }

        debug!("Deleting application {}", id);
        let updated = self.repository.remove(id).await;
        self.replace_cache(updated).await;
    }

    /// Cache lookup; never touches storage.
    pub async fn get_application_by_id(&self, id: &str) -> Option<Application> {
        let inner = self.inner.read().await;
        inner.applications.iter().find(|app| app.id == id).cloned()
    }

    /// Up to five stage names for an autocomplete field.
    pub async fn get_suggested_stage_names(&self, current_input: &str) -> Vec<String> {
        let inner = self.inner.read().await;
        suggestion::suggest_stage_names(&inner.applications, current_input)
    }

    /// Flow graph of the cached collection.
    pub async fn flow_graph(&self) -> FlowGraph {
        let inner = self.inner.read().await;
        flow::transform(&inner.applications)
    }

    async fn accepts_mutations(&self) -> bool {
        if self.state().await == StoreState::TornDown {
            warn!("Ignoring mutation on a torn down application store");
            return false;
        }
        true
    }

    async fn replace_cache(&self, applications: ApplicationData) {
        let mut inner = self.inner.write().await;
        inner.applications = applications;
        inner.state = StoreState::Ready;
    }
}
