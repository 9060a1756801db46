//! Application state shared across handlers

use crate::config::Settings;
use crate::engine::SearchEngine;
use std::sync::Arc;

/// Shared application state.
///
/// Read-only after process start; safe to clone into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search engine collaborator
    pub engine: Arc<dyn SearchEngine>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, engine: Arc<dyn SearchEngine>) -> Self {
        Self {
            settings: Arc::new(settings),
            engine,
        }
    }
}
