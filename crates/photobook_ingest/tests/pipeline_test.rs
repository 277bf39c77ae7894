//! Integration tests for the ingestion pipeline and listing service.

mod common;

use common::{upload, MemoryBlobStorage, MemoryPhotoRepository, StubCaptioner};
use photobook_error::{IngestErrorKind, PhotobookErrorKind};
use photobook_ingest::{PhotoCatalog, PhotoPipeline};
use std::sync::Arc;
use uuid::Uuid;

const JPEG_BYTES: &[u8] = b"\xff\xd8\xff\xe0 not a real jpeg";

fn pipeline_with(
    captioner: StubCaptioner,
) -> (
    PhotoPipeline,
    Arc<MemoryPhotoRepository>,
    Arc<MemoryBlobStorage>,
) {
    let photos = Arc::new(MemoryPhotoRepository::default());
    let blobs = Arc::new(MemoryBlobStorage::default());
    let pipeline = PhotoPipeline::new(photos.clone(), blobs.clone(), Arc::new(captioner));
    (pipeline, photos, blobs)
}

fn assert_ingest_error(err: photobook_error::PhotobookError, want: fn(&IngestErrorKind) -> bool) {
    match err.kind() {
        PhotobookErrorKind::Ingest(e) => assert!(want(&e.kind), "unexpected kind: {:?}", e.kind),
        other => panic!("expected ingest error, got {:?}", other),
    }
}

#[tokio::test]
async fn round_trip_returns_identical_bytes_and_mime() {
    let (pipeline, _, _) =
        pipeline_with(StubCaptioner::Caption("a dog on a beach".to_string(), 0.9));

    let photo = pipeline
        .create(upload("holiday.jpg", "image/jpeg", JPEG_BYTES))
        .await
        .unwrap();

    assert_eq!(photo.original_filename, "holiday.jpg");
    assert_eq!(photo.description.as_deref(), Some("a dog on a beach"));
    assert!(photo.storage_key.ends_with(".jpg"));
    assert_eq!(photo.storage_key, photo.storage_key.to_lowercase());

    let content = pipeline.fetch(photo.id).await.unwrap();
    assert_eq!(content.bytes, JPEG_BYTES);
    assert_eq!(content.mime_type, "image/jpeg");
}

#[tokio::test]
async fn listing_is_ordered_by_original_filename() {
    let (pipeline, photos, _) = pipeline_with(StubCaptioner::Empty);

    for name in ["b.jpg", "a.png", "c.gif"] {
        let content_type = photobook_core::mime_for_filename(name);
        pipeline
            .create(upload(name, &content_type, JPEG_BYTES))
            .await
            .unwrap();
    }

    let catalog = PhotoCatalog::new(photos);
    let names: Vec<String> = catalog
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.original_filename)
        .collect();

    assert_eq!(names, ["a.png", "b.jpg", "c.gif"]);
}

#[tokio::test]
async fn create_succeeds_without_description_when_analyzer_fails() {
    let (pipeline, photos, blobs) = pipeline_with(StubCaptioner::Broken);

    let photo = pipeline
        .create(upload("cat.png", "image/png", JPEG_BYTES))
        .await
        .unwrap();

    assert!(photo.description.is_none());
    assert_eq!(photos.len(), 1);
    assert_eq!(blobs.len(), 1);
}

#[tokio::test]
async fn create_succeeds_without_description_when_analyzer_returns_nothing() {
    let (pipeline, _, _) = pipeline_with(StubCaptioner::Empty);

    let photo = pipeline
        .create(upload("cat.png", "image/png", JPEG_BYTES))
        .await
        .unwrap();

    assert!(photo.description.is_none());
}

#[tokio::test]
async fn failed_blob_write_leaves_no_record() {
    let (pipeline, photos, blobs) = pipeline_with(StubCaptioner::Empty);
    blobs.fail_writes();

    let result = pipeline
        .create(upload("cat.png", "image/png", JPEG_BYTES))
        .await;

    assert!(result.is_err());
    assert_eq!(photos.len(), 0);
    assert_eq!(blobs.len(), 0);
}

#[tokio::test]
async fn delete_succeeds_when_blob_is_already_gone() {
    let (pipeline, photos, blobs) = pipeline_with(StubCaptioner::Empty);

    let photo = pipeline
        .create(upload("cat.png", "image/png", JPEG_BYTES))
        .await
        .unwrap();

    // Blob removed out-of-band; the record now dangles.
    blobs.remove(&photo.storage_key);

    pipeline.delete(photo.id).await.unwrap();
    assert_eq!(photos.len(), 0);
}

#[tokio::test]
async fn non_image_upload_is_rejected_without_side_effects() {
    let (pipeline, photos, blobs) = pipeline_with(StubCaptioner::Empty);

    let result = pipeline
        .create(upload("notes.txt", "text/plain", b"hello"))
        .await;

    assert_ingest_error(result.unwrap_err(), |k| {
        matches!(k, IngestErrorKind::InvalidUpload(_))
    });
    assert_eq!(photos.len(), 0);
    assert_eq!(blobs.len(), 0);
}

#[tokio::test]
async fn mismatched_type_and_extension_are_rejected() {
    let (pipeline, _, _) = pipeline_with(StubCaptioner::Empty);

    // Image content type, non-image extension.
    let result = pipeline
        .create(upload("archive.txt", "image/png", JPEG_BYTES))
        .await;
    assert_ingest_error(result.unwrap_err(), |k| {
        matches!(k, IngestErrorKind::InvalidUpload(_))
    });

    // Image extension, non-image content type.
    let result = pipeline
        .create(upload("cat.jpg", "text/plain", JPEG_BYTES))
        .await;
    assert_ingest_error(result.unwrap_err(), |k| {
        matches!(k, IngestErrorKind::InvalidUpload(_))
    });
}

#[tokio::test]
async fn unknown_id_yields_not_found_without_mutation() {
    let (pipeline, photos, blobs) = pipeline_with(StubCaptioner::Empty);
    let id = Uuid::new_v4();

    let result = pipeline.fetch(id).await;
    assert_ingest_error(result.unwrap_err(), |k| {
        matches!(k, IngestErrorKind::PhotoNotFound(_))
    });

    let result = pipeline.delete(id).await;
    assert_ingest_error(result.unwrap_err(), |k| {
        matches!(k, IngestErrorKind::PhotoNotFound(_))
    });

    assert_eq!(photos.len(), 0);
    assert_eq!(blobs.len(), 0);
}

#[tokio::test]
async fn same_filename_uploads_get_distinct_keys() {
    let (pipeline, _, blobs) = pipeline_with(StubCaptioner::Empty);

    let first = pipeline
        .create(upload("photo.JPG", "image/jpeg", JPEG_BYTES))
        .await
        .unwrap();
    let second = pipeline
        .create(upload("photo.jpg", "image/jpeg", JPEG_BYTES))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_ne!(first.storage_key, second.storage_key);
    assert_eq!(blobs.len(), 2);
}

#[tokio::test]
async fn fetch_surfaces_store_divergence() {
    let (pipeline, _, blobs) = pipeline_with(StubCaptioner::Empty);

    let photo = pipeline
        .create(upload("cat.gif", "image/gif", JPEG_BYTES))
        .await
        .unwrap();
    blobs.remove(&photo.storage_key);

    let result = pipeline.fetch(photo.id).await;
    assert_ingest_error(result.unwrap_err(), |k| {
        matches!(k, IngestErrorKind::BlobMissing(_))
    });
}
