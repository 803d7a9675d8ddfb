//! Application state

use std::sync::Arc;

use crate::config::Config;

/// Shared application state
///
/// Cheap to clone; the configuration is immutable once loaded.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
