//! Application state shared across handlers

use std::sync::Arc;

use crate::db::QuestionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn QuestionStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn QuestionStore {
        self.store.as_ref()
    }
}
