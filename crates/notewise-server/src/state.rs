//! Shared application state.

use notewise_core::NotewiseConfig;
use notewise_ingest::Pipeline;

/// Shared application state accessible from all route handlers.
///
/// Read-only after startup; handlers build their own per-request state.
pub struct AppState {
    pub config: NotewiseConfig,
    pub pipeline: Pipeline,
}

impl AppState {
    pub fn new(config: NotewiseConfig) -> Self {
        let pipeline = Pipeline::new(config.pipeline.clone());
        Self { config, pipeline }
    }
}
