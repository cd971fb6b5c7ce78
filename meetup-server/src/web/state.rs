//! Application state for the web layer.

use std::sync::Arc;

use crate::dataset::Dataset;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// The data set is loaded once at startup and never changes, so handlers
/// share it read-only.
#[derive(Clone)]
pub struct AppState {
    /// Travel times and attractions
    pub dataset: Arc<Dataset>,

    /// Scoring weights and request limits
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(dataset: Dataset, config: PlannerConfig) -> Self {
        Self {
            dataset: Arc::new(dataset),
            config: Arc::new(config),
        }
    }
}
