//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! dataset store is immutable after startup, so a shared `Arc` is all the
//! coordination it needs.

use std::sync::Arc;

use flows::DataStore;
use time::Date;

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<DataStore>,
}

impl AppState {
    pub fn new(store: DataStore) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Quoted entity tag for API responses derived from the dataset alone.
    pub fn etag(&self) -> String {
        format!("\"{}\"", self.store.fingerprint())
    }

    /// Entity tag for responses whose body also depends on the current date.
    pub fn dated_etag(&self, today: Date) -> String {
        format!("\"{}-{today}\"", self.store.fingerprint())
    }
}
