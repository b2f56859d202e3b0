use std::path::PathBuf;
use std::sync::Arc;

use crate::inference::SustainabilityScorer;

/// Shared per-request state: the scorer loaded once at startup.
#[derive(Clone)]
pub struct HandlerState {
    pub scorer: Arc<SustainabilityScorer>,

    /// Checkpoint directory the scorer was loaded from; `None` in stub mode.
    /// Reported by `GET /ready`.
    pub model_path: Option<PathBuf>,
}

impl HandlerState {
    pub fn new(scorer: Arc<SustainabilityScorer>, model_path: Option<PathBuf>) -> Self {
        Self { scorer, model_path }
    }
}
