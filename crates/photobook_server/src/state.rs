//! Shared handler state.

use photobook_ingest::{PhotoCatalog, PhotoPipeline};
use std::sync::Arc;

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The ingestion pipeline (create, fetch, delete).
    pub pipeline: Arc<PhotoPipeline>,
    /// The listing service.
    pub catalog: Arc<PhotoCatalog>,
}

impl AppState {
    /// Creates new handler state.
    pub fn new(pipeline: Arc<PhotoPipeline>, catalog: Arc<PhotoCatalog>) -> Self {
        Self { pipeline, catalog }
    }
}
