use std::sync::Arc;

use crate::core::NameStore;
use crate::query::NameQueryService;

/// Shared application state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    inner: Arc<NameQueryService>,
}

impl AppState {
    pub fn new(service: NameQueryService) -> Self {
        Self {
            inner: Arc::new(service),
        }
    }

    pub fn from_store(store: NameStore) -> Self {
        Self::new(NameQueryService::from_entropy(store))
    }

    pub fn names(&self) -> &NameQueryService {
        &self.inner
    }
}
