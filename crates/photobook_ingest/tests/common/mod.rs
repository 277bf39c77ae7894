//! In-memory collaborators for pipeline tests.

use async_trait::async_trait;
use photobook_core::{Photo, PhotoUpload};
use photobook_database::PhotoRepository;
use photobook_error::{
    DatabaseError, DatabaseErrorKind, PhotobookResult, StorageError, StorageErrorKind,
    VisionError, VisionErrorKind,
};
use photobook_storage::{BlobStorage, StoredBlob};
use photobook_vision::{Caption, Captioner};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

/// Repository double backed by a `HashMap`.
#[derive(Default)]
pub struct MemoryPhotoRepository {
    records: Mutex<HashMap<Uuid, Photo>>,
}

impl MemoryPhotoRepository {
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl PhotoRepository for MemoryPhotoRepository {
    async fn insert(&self, photo: &Photo) -> PhotobookResult<()> {
        let mut records = self.records.lock().unwrap();
        if records.contains_key(&photo.id) {
            return Err(
                DatabaseError::new(DatabaseErrorKind::AlreadyExists(photo.id.to_string())).into(),
            );
        }
        records.insert(photo.id, photo.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> PhotobookResult<Option<Photo>> {
        Ok(self.records.lock().unwrap().get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> PhotobookResult<()> {
        self.records.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn list_all(&self) -> PhotobookResult<Vec<Photo>> {
        let mut photos: Vec<Photo> = self.records.lock().unwrap().values().cloned().collect();
        photos.sort_by(|a, b| a.original_filename.cmp(&b.original_filename));
        Ok(photos)
    }
}

/// Blob storage double backed by a `HashMap`, with a switch to make
/// writes fail.
#[derive(Default)]
pub struct MemoryBlobStorage {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
    fail_writes: AtomicBool,
}

impl MemoryBlobStorage {
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn remove(&self, key: &str) {
        self.blobs.lock().unwrap().remove(&key.to_lowercase());
    }

    pub fn len(&self) -> usize {
        self.blobs.lock().unwrap().len()
    }
}

#[async_trait]
impl BlobStorage for MemoryBlobStorage {
    async fn save(&self, key: &str, data: &[u8], overwrite: bool) -> PhotobookResult<StoredBlob> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(
                StorageError::new(StorageErrorKind::Unavailable("backend down".to_string()))
                    .into(),
            );
        }
        let key = key.to_lowercase();
        let mut blobs = self.blobs.lock().unwrap();
        if !overwrite && blobs.contains_key(&key) {
            return Err(StorageError::new(StorageErrorKind::AlreadyExists(key)).into());
        }
        let size_bytes = data.len() as u64;
        blobs.insert(key.clone(), data.to_vec());
        Ok(StoredBlob {
            key,
            mime_type: "application/octet-stream".to_string(),
            size_bytes,
        })
    }

    async fn read(&self, key: &str) -> PhotobookResult<Option<Vec<u8>>> {
        Ok(self.blobs.lock().unwrap().get(&key.to_lowercase()).cloned())
    }

    async fn delete(&self, key: &str) -> PhotobookResult<()> {
        self.blobs.lock().unwrap().remove(&key.to_lowercase());
        Ok(())
    }

    async fn exists(&self, key: &str) -> PhotobookResult<bool> {
        Ok(self
            .blobs
            .lock()
            .unwrap()
            .contains_key(&key.to_lowercase()))
    }
}

/// Captioner double with a fixed behavior.
pub enum StubCaptioner {
    Caption(String, f64),
    Empty,
    Broken,
}

#[async_trait]
impl Captioner for StubCaptioner {
    async fn describe(&self, _image: &[u8]) -> PhotobookResult<Option<Caption>> {
        match self {
            StubCaptioner::Caption(text, confidence) => Ok(Some(Caption {
                text: text.clone(),
                confidence: *confidence,
            })),
            StubCaptioner::Empty => Ok(None),
            StubCaptioner::Broken => Err(VisionError::new(VisionErrorKind::Http(
                "analyzer unreachable".to_string(),
            ))
            .into()),
        }
    }
}

pub fn upload(file_name: &str, content_type: &str, bytes: &[u8]) -> PhotoUpload {
    PhotoUpload {
        file_name: file_name.to_string(),
        content_type: content_type.to_string(),
        bytes: bytes.to_vec(),
    }
}
