//! Shared application state for the web server.

use complyx_analysis::AnalysisEngine;
use std::sync::Arc;

/// Shared state injected into every Axum handler. The engine holds no
/// cross-call mutable state; concurrent submissions are independent.
pub struct AppState {
    pub engine: AnalysisEngine,
}

impl AppState {
    pub fn new(engine: AnalysisEngine) -> Self {
        Self { engine }
    }
}

pub type SharedState = Arc<AppState>;
