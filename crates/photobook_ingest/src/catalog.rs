//! Read-only photo listing.

use photobook_core::Photo;
use photobook_database::PhotoRepository;
use photobook_error::PhotobookResult;
use std::sync::Arc;
use tracing::instrument;

/// Read-only enumeration of photo records.
///
/// Pure delegation to the repository's ordered scan; the ordering (by
/// original filename, ascending) is a store contract.
pub struct PhotoCatalog {
    photos: Arc<dyn PhotoRepository>,
}

impl PhotoCatalog {
    /// Create a catalog over the given repository.
    pub fn new(photos: Arc<dyn PhotoRepository>) -> Self {
        Self { photos }
    }

    /// All photo records, ordered by original filename.
    #[instrument(skip(self))]
    pub async fn list(&self) -> PhotobookResult<Vec<Photo>> {
        self.photos.list_all().await
    }
}
