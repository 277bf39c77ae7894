//! Blob storage trait definition.

use photobook_error::PhotobookResult;

/// Descriptor for a stored blob.
///
/// Backends without a native content-type field (the filesystem) carry the
/// MIME tag here; it is resolved from the key's extension at save time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    /// The normalized (lower-cased) key the blob was stored under.
    pub key: String,
    /// MIME type resolved from the key's extension.
    pub mime_type: String,
    /// Size of the blob in bytes.
    pub size_bytes: u64,
}

/// Trait for pluggable blob storage backends.
///
/// Implementations store and retrieve binary content under caller-derived
/// keys; photo metadata is managed separately in the database.
#[async_trait::async_trait]
pub trait BlobStorage: Send + Sync {
    /// Write bytes under `key`.
    ///
    /// The key is normalized to lower case before use. When `overwrite` is
    /// false and an object already exists at the key, the call fails with
    /// `StorageErrorKind::AlreadyExists` rather than silently replacing it.
    ///
    /// # Errors
    ///
    /// Returns an error on key collision (without `overwrite`), on an
    /// unusable key, or when the backend cannot complete the write.
    async fn save(&self, key: &str, data: &[u8], overwrite: bool) -> PhotobookResult<StoredBlob>;

    /// Read the blob at `key`, or `None` when the key does not exist.
    ///
    /// Absence is not an error; callers decide what a missing blob means.
    async fn read(&self, key: &str) -> PhotobookResult<Option<Vec<u8>>>;

    /// Remove the blob at `key` if present.
    ///
    /// Deleting a missing blob is a no-op, not an error.
    async fn delete(&self, key: &str) -> PhotobookResult<()>;

    /// Whether a blob exists at `key`.
    async fn exists(&self, key: &str) -> PhotobookResult<bool>;
}
