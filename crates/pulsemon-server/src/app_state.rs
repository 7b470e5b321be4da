//! Shared application state for the pulsemon server.
//!
//! One `MetricStore` is created at startup and lives for the process
//! lifetime; every request handler reaches it through `MetricIngest`.

use std::sync::Arc;

use pulsemon_core::MetricStore;

use crate::ingest::MetricIngest;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    ingest: MetricIngest,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_store(Arc::new(MetricStore::new()))
    }

    /// Build state over an existing store (tests inspect it directly).
    pub fn with_store(store: Arc<MetricStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                ingest: MetricIngest::new(store),
            }),
        }
    }

    pub fn ingest(&self) -> &MetricIngest {
        &self.inner.ingest
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
