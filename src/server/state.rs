//! Server application state shared across handlers

use crate::generation::GenerationService;
use std::sync::Arc;

/// Shared state for the server. The generation service holds no per-request
/// state, so one instance serves every call.
#[derive(Clone)]
pub struct ServerAppState {
    pub service: Arc<GenerationService>,
}

impl ServerAppState {
    pub fn new(service: GenerationService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
