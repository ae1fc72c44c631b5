//! API server state

use std::sync::Arc;

use crate::config::AppConfig;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Deployment environment name, e.g. "development" or "production".
    pub fn environment(&self) -> &str {
        &self.config.env
    }
}
