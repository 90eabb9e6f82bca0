//! Shared application state for all routes.

use crate::store::{MemStorage, Storage};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// State over a freshly seeded in-memory store.
    pub fn seeded() -> Self {
        Self::new(Arc::new(MemStorage::new()))
    }
}
