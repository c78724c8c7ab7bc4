//! Application state shared across handlers

use std::sync::Arc;

use kennel_persistence::PersistenceService;

use super::config::Configuration;

pub struct AppState {
    pub configuration: Configuration,
    /// Storage backend behind every breed and dog operation
    pub persistence: Arc<dyn PersistenceService>,
}

impl AppState {
    pub fn new(configuration: Configuration, persistence: Arc<dyn PersistenceService>) -> Self {
        Self {
            configuration,
            persistence,
        }
    }

    pub fn persistence(&self) -> &dyn PersistenceService {
        self.persistence.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("configuration", &self.configuration)
            .field("persistence", &self.persistence.backend_name())
            .finish()
    }
}
