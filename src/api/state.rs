use std::sync::Arc;

use crate::db::MovieStore;

/// Shared application state
///
/// Holds the collaborators handlers depend on; built once at startup and
/// cloned cheaply into every request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MovieStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self { store }
    }
}
