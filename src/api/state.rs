//! Application state for the Shift Extraction Engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, ScannerConfig};

/// Shared application state.
///
/// Holds the scanner configuration, shared read-only by every request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the scanner configuration.
    pub fn config(&self) -> &ScannerConfig {
        self.config.config()
    }
}
