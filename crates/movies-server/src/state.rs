//! Application state with the shared `MovieStore` for concurrent access.
//!
//! [`AppState`] wraps the store in `Arc<tokio::sync::RwLock<>>` for use with
//! axum handlers. Uses `tokio::sync::RwLock` (async-aware) instead of
//! `std::sync::RwLock` (blocking) so handlers await the lock without blocking
//! the tokio runtime; reads take the shared lock, writes the exclusive one.

use std::sync::Arc;

use crate::store::MovieStore;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared movie store (async RwLock, non-blocking await).
    pub store: Arc<tokio::sync::RwLock<MovieStore>>,
}

impl AppState {
    /// Creates an `AppState` around the given store.
    pub fn new(store: MovieStore) -> Self {
        AppState {
            store: Arc::new(tokio::sync::RwLock::new(store)),
        }
    }

    /// Creates an `AppState` with the two fixed sample records, as used at
    /// server startup.
    pub fn seeded() -> Self {
        AppState::new(MovieStore::seeded())
    }
}
