//! The photo ingestion pipeline.

use chrono::Utc;
use photobook_core::{is_image, mime_for_filename, Photo, PhotoUpload};
use photobook_database::PhotoRepository;
use photobook_error::{IngestError, IngestErrorKind, PhotobookResult};
use photobook_storage::BlobStorage;
use photobook_vision::Captioner;
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};
use uuid::Uuid;

/// Longest accepted original filename.
const MAX_FILENAME_CHARS: usize = 256;

/// Binary content of one photo, with its resolved MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoContent {
    /// The photo bytes.
    pub bytes: Vec<u8>,
    /// MIME type resolved from the record's original filename.
    pub mime_type: String,
}

/// Orchestrates create, fetch, and delete for a single photo.
///
/// Collaborators are injected; the pipeline owns no global state. Within
/// one operation the steps run strictly in sequence, because each step
/// depends on the identity established by the previous one.
pub struct PhotoPipeline {
    photos: Arc<dyn PhotoRepository>,
    blobs: Arc<dyn BlobStorage>,
    captioner: Arc<dyn Captioner>,
}

impl PhotoPipeline {
    /// Create a pipeline over the given collaborators.
    pub fn new(
        photos: Arc<dyn PhotoRepository>,
        blobs: Arc<dyn BlobStorage>,
        captioner: Arc<dyn Captioner>,
    ) -> Self {
        Self {
            photos,
            blobs,
            captioner,
        }
    }

    /// Ingest one uploaded image.
    ///
    /// Validation happens before any store is touched. Captioning is
    /// best-effort: an analyzer failure or an empty result degrades the
    /// record to `description = None` and the upload still succeeds. The
    /// blob write precedes the metadata insert, so a failed write leaves
    /// no record behind; the write refuses to overwrite an existing key.
    ///
    /// # Errors
    ///
    /// `IngestErrorKind::InvalidUpload` for anything that is not an
    /// accepted image; storage and database errors pass through.
    #[instrument(skip(self, upload), fields(file_name = %upload.file_name, size = upload.bytes.len()))]
    pub async fn create(&self, upload: PhotoUpload) -> PhotobookResult<Photo> {
        self.validate(&upload)?;

        let id = Uuid::new_v4();
        let storage_key = Photo::storage_key_for(id, &upload.file_name);

        let description = match self.captioner.describe(&upload.bytes).await {
            Ok(Some(caption)) => {
                debug!(confidence = caption.confidence, "Caption accepted");
                Some(caption.text)
            }
            Ok(None) => {
                debug!("Analyzer returned no caption");
                None
            }
            Err(e) => {
                warn!(error = %e, "Captioning failed, storing photo without description");
                None
            }
        };

        self.blobs.save(&storage_key, &upload.bytes, false).await?;

        let photo = Photo {
            id,
            original_filename: upload.file_name,
            storage_key,
            description,
            uploaded_at: Utc::now(),
        };
        self.photos.insert(&photo).await?;

        debug!(id = %photo.id, key = %photo.storage_key, "Photo ingested");
        Ok(photo)
    }

    /// Fetch the binary content of a photo.
    ///
    /// The MIME type is resolved from the record's original filename via
    /// the static extension table, not from any stored content type.
    ///
    /// # Errors
    ///
    /// `PhotoNotFound` when no record exists; `BlobMissing` when the
    /// record exists but its blob does not, meaning the stores have
    /// diverged and the divergence is surfaced rather than masked.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn fetch(&self, id: Uuid) -> PhotobookResult<PhotoContent> {
        let photo = self
            .photos
            .find_by_id(id)
            .await?
            .ok_or_else(|| IngestError::new(IngestErrorKind::PhotoNotFound(id.to_string())))?;

        let mime_type = mime_for_filename(&photo.original_filename);

        let bytes = self.blobs.read(&photo.storage_key).await?.ok_or_else(|| {
            error!(id = %id, key = %photo.storage_key, "Record exists but blob is missing");
            IngestError::new(IngestErrorKind::BlobMissing(id.to_string()))
        })?;

        Ok(PhotoContent { bytes, mime_type })
    }

    /// Delete a photo: blob first, then the metadata record.
    ///
    /// Deleting a blob that is already gone is a no-op, so a record whose
    /// blob was lost independently can still be removed. If the blob
    /// delete fails outright the record is left in place: a dangling
    /// record is detectable, an orphaned blob is not.
    ///
    /// # Errors
    ///
    /// `PhotoNotFound` when no record exists for the id.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: Uuid) -> PhotobookResult<()> {
        let photo = self
            .photos
            .find_by_id(id)
            .await?
            .ok_or_else(|| IngestError::new(IngestErrorKind::PhotoNotFound(id.to_string())))?;

        self.blobs.delete(&photo.storage_key).await?;
        self.photos.delete(id).await?;

        debug!(id = %id, "Photo deleted");
        Ok(())
    }

    fn validate(&self, upload: &PhotoUpload) -> PhotobookResult<()> {
        if upload.bytes.is_empty() {
            return Err(
                IngestError::new(IngestErrorKind::InvalidUpload("empty file".to_string())).into(),
            );
        }
        if upload.file_name.chars().count() > MAX_FILENAME_CHARS {
            return Err(IngestError::new(IngestErrorKind::InvalidUpload(format!(
                "filename longer than {} characters",
                MAX_FILENAME_CHARS
            )))
            .into());
        }
        if !is_image(&upload.content_type, &upload.file_name) {
            return Err(IngestError::new(IngestErrorKind::InvalidUpload(format!(
                "{} ({}) is not an accepted image",
                upload.file_name, upload.content_type
            )))
            .into());
        }
        Ok(())
    }
}
