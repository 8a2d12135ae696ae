//! Application state for the roster engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::scheduling::ScheduleEngine;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// schedule engine with its configuration and collaborator stores.
#[derive(Clone)]
pub struct AppState {
    /// The schedule engine.
    engine: Arc<ScheduleEngine>,
}

impl AppState {
    /// Creates a new application state around the given engine.
    pub fn new(engine: ScheduleEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the schedule engine.
    pub fn engine(&self) -> &ScheduleEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
