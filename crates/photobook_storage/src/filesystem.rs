//! Filesystem-based blob storage implementation.

use crate::{BlobStorage, StoredBlob};
use photobook_error::{PhotobookResult, StorageError, StorageErrorKind};
use std::path::PathBuf;

/// Filesystem storage backend.
///
/// Blobs live as flat files under a base directory, named by their
/// normalized key. Keys are derived from photo ids so the directory never
/// grows beyond one entry per photo.
///
/// Writes go to a temp file first and are renamed into place, so a
/// crashed write never leaves a partial blob at the final key.
pub struct FileSystemStorage {
    base_path: PathBuf,
}

impl FileSystemStorage {
    /// Create a new filesystem storage backend.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> PhotobookResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Created filesystem storage");
        Ok(Self { base_path })
    }

    /// Normalize a key and reject anything that could escape the base
    /// directory. Keys are single flat names; separators and `..` are
    /// never valid.
    fn normalize_key(key: &str) -> PhotobookResult<String> {
        let key = key.to_lowercase();
        if key.is_empty()
            || key.contains('/')
            || key.contains('\\')
            || key.contains("..")
        {
            return Err(StorageError::new(StorageErrorKind::InvalidKey(key)).into());
        }
        Ok(key)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }
}

#[async_trait::async_trait]
impl BlobStorage for FileSystemStorage {
    #[tracing::instrument(skip(self, data), fields(key = %key, size = data.len()))]
    async fn save(&self, key: &str, data: &[u8], overwrite: bool) -> PhotobookResult<StoredBlob> {
        let key = Self::normalize_key(key)?;
        let path = self.path_for(&key);

        if !overwrite && tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::new(StorageErrorKind::AlreadyExists(key)).into());
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Write(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Write(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        let mime_type = mime_guess::from_path(&path)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string();

        tracing::info!(
            key = %key,
            path = %path.display(),
            size = data.len(),
            mime = %mime_type,
            "Stored blob"
        );

        Ok(StoredBlob {
            key,
            mime_type,
            size_bytes: data.len() as u64,
        })
    }

    #[tracing::instrument(skip(self), fields(key = %key))]
    async fn read(&self, key: &str) -> PhotobookResult<Option<Vec<u8>>> {
        let key = Self::normalize_key(key)?;
        let path = self.path_for(&key);

        match tokio::fs::read(&path).await {
            Ok(data) => {
                tracing::debug!(key = %key, size = data.len(), "Read blob");
                Ok(Some(data))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::new(StorageErrorKind::Read(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self), fields(key = %key))]
    async fn delete(&self, key: &str) -> PhotobookResult<()> {
        let key = Self::normalize_key(key)?;
        let path = self.path_for(&key);

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!(key = %key, "Deleted blob");
                Ok(())
            }
            // Absent blob: delete is idempotent.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::new(StorageErrorKind::Write(format!(
                "delete {}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self), fields(key = %key))]
    async fn exists(&self, key: &str) -> PhotobookResult<bool> {
        let key = Self::normalize_key(key)?;
        let path = self.path_for(&key);
        Ok(tokio::fs::try_exists(&path).await.unwrap_or(false))
    }
}
