//! Key-addressed blob storage for Photobook.
//!
//! This crate provides the blob store seam used by the ingestion pipeline:
//! binary content stored under a caller-derived key, with overwrite
//! refusal, optional reads, and idempotent deletes. Keys are normalized to
//! lower case by every backend, independent of caller casing.
//!
//! # Example
//!
//! ```no_run
//! use photobook_storage::{BlobStorage, FileSystemStorage};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = FileSystemStorage::new("/var/photobook/blobs")?;
//!
//! let data = vec![0u8; 1024]; // JPEG data
//! let key = "8f14e45f-ceea-4f3a-9a5b-6c2d3e4f5a6b.jpg";
//! let stored = storage.save(key, &data, false).await?;
//! assert_eq!(stored.mime_type, "image/jpeg");
//!
//! let read_back = storage.read(key).await?;
//! assert_eq!(read_back.as_deref(), Some(&data[..]));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod storage;

pub use filesystem::FileSystemStorage;
pub use photobook_error::{StorageError, StorageErrorKind};
pub use storage::{BlobStorage, StoredBlob};
