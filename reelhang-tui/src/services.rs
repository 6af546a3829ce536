//! Service layer adapter for the TUI
//!
//! Bridges the async catalog client and the synchronous event loop.
//!
//! # Architecture
//!
//! - `ServiceHandle` wraps a `CatalogSource` and owns a tokio runtime
//! - Fetches are spawned as async tasks; results come back over a
//!   crossbeam channel the event loop drains with `try_recv`
//!
//! A fetch whose screen has been torn down simply never has its channel
//! drained; the late result is dropped with the receiver.

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver};
use libreelhang::catalog::CatalogSource;
use libreelhang::{HttpCatalog, MovieRecord};

use crate::error::Result;

/// Result of one catalog fetch, delivered to the sync event loop.
#[derive(Debug, Clone)]
pub enum CatalogEvent {
    Loaded(Vec<MovieRecord>),
    Failed(String),
}

/// Service handle for TUI operations
///
/// Owns the tokio runtime so async catalog reads never block the UI
/// thread.
pub struct ServiceHandle {
    catalog: Arc<dyn CatalogSource>,
    runtime: tokio::runtime::Runtime,
}

impl ServiceHandle {
    /// Create a service handle for the given catalog endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn new(endpoint: String) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;

        Ok(Self {
            catalog: Arc::new(HttpCatalog::new(endpoint)),
            runtime,
        })
    }

    /// Create a service handle over an arbitrary catalog source.
    /// Integration tests use this with `MockCatalog`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn with_source(catalog: Arc<dyn CatalogSource>) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;

        Ok(Self { catalog, runtime })
    }

    /// Issue one read of the movie collection.
    ///
    /// Spawns the async fetch and returns immediately with a receiver
    /// that will carry exactly one `CatalogEvent`.
    pub fn fetch_films(&self) -> Receiver<CatalogEvent> {
        let (tx, rx) = unbounded();
        let catalog = Arc::clone(&self.catalog);

        self.runtime.spawn(async move {
            let event = match catalog.fetch_films().await {
                Ok(records) => CatalogEvent::Loaded(records),
                Err(e) => {
                    tracing::warn!(source = catalog.name(), error = %e, "catalog fetch failed");
                    CatalogEvent::Failed(e.to_string())
                }
            };

            // Receiver dropped means the screen went away; discard.
            let _ = tx.send(event);
        });

        rx
    }
}
