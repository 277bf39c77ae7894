//! Tests for the filesystem storage backend.

use photobook_storage::{BlobStorage, FileSystemStorage};
use tempfile::TempDir;

#[tokio::test]
async fn test_save_and_read() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    let data = b"fake jpeg bytes";
    let stored = storage.save("photo-1.jpg", data, false).await.unwrap();

    assert_eq!(stored.key, "photo-1.jpg");
    assert_eq!(stored.mime_type, "image/jpeg");
    assert_eq!(stored.size_bytes, data.len() as u64);

    let read_back = storage.read("photo-1.jpg").await.unwrap();
    assert_eq!(read_back.as_deref(), Some(&data[..]));
}

#[tokio::test]
async fn test_keys_are_normalized_to_lower_case() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    let stored = storage.save("PHOTO-2.PNG", b"png", false).await.unwrap();
    assert_eq!(stored.key, "photo-2.png");

    // Any casing of the key reaches the same blob.
    assert!(storage.exists("photo-2.png").await.unwrap());
    assert!(storage.exists("Photo-2.Png").await.unwrap());
    let read_back = storage.read("photo-2.png").await.unwrap();
    assert_eq!(read_back.as_deref(), Some(&b"png"[..]));
}

#[tokio::test]
async fn test_save_refuses_silent_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    storage.save("photo-3.gif", b"first", false).await.unwrap();
    let result = storage.save("photo-3.gif", b"second", false).await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().kind(),
        photobook_error::PhotobookErrorKind::Storage(e)
            if matches!(e.kind, photobook_storage::StorageErrorKind::AlreadyExists(_))
    ));

    // Original content untouched.
    let read_back = storage.read("photo-3.gif").await.unwrap();
    assert_eq!(read_back.as_deref(), Some(&b"first"[..]));
}

#[tokio::test]
async fn test_save_with_overwrite_replaces() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    storage.save("photo-4.jpg", b"first", false).await.unwrap();
    storage.save("photo-4.jpg", b"second", true).await.unwrap();

    let read_back = storage.read("photo-4.jpg").await.unwrap();
    assert_eq!(read_back.as_deref(), Some(&b"second"[..]));
}

#[tokio::test]
async fn test_read_missing_key_is_none() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    let read_back = storage.read("never-written.jpg").await.unwrap();
    assert!(read_back.is_none());
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    storage.save("photo-5.png", b"bytes", false).await.unwrap();
    assert!(storage.exists("photo-5.png").await.unwrap());

    storage.delete("photo-5.png").await.unwrap();
    assert!(!storage.exists("photo-5.png").await.unwrap());

    // Deleting again is not an error.
    storage.delete("photo-5.png").await.unwrap();
}

#[tokio::test]
async fn test_rejects_keys_with_path_separators() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    for key in ["../escape.jpg", "a/b.jpg", "a\\b.jpg", ""] {
        let result = storage.save(key, b"bytes", false).await;
        assert!(result.is_err(), "key {:?} should be rejected", key);
    }
}
