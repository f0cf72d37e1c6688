//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::admission::AdmissionController;
use crate::core::budget::UsageStore;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for efficient sharing across worker
/// threads.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Admission controller
    pub admission: Arc<AdmissionController>,
    /// Usage store (for the recording endpoint)
    pub usage: Arc<dyn UsageStore>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(
        config: Config,
        admission: Arc<AdmissionController>,
        usage: Arc<dyn UsageStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            admission,
            usage,
        }
    }
}
