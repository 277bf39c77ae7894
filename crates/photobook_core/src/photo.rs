//! The photo record and upload input.

use crate::image_kind::extension_of;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata record for one uploaded image.
///
/// Records are immutable once created; the only lifecycle transition is
/// deletion. The record is the source of truth for a photo's existence,
/// the blob at `storage_key` is the source of truth for its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Unique identifier, generated at creation.
    pub id: Uuid,
    /// Client-supplied filename (max 256 characters).
    pub original_filename: String,
    /// Derived name under which the binary is stored (max 512 characters).
    pub storage_key: String,
    /// Caption produced by content analysis, absent when analysis
    /// yielded nothing.
    pub description: Option<String>,
    /// UTC timestamp set at creation.
    pub uploaded_at: DateTime<Utc>,
}

impl Photo {
    /// Derive the storage key for a photo id and its original filename.
    ///
    /// The key is the lower-cased id followed by the original extension,
    /// e.g. `8f14e45f-ceea-4f3a-9a5b-6c2d3e4f5a6b.jpg`. Ids are generated
    /// per upload and never recycled, so derived keys never collide.
    ///
    /// # Examples
    ///
    /// ```
    /// use photobook_core::Photo;
    /// use uuid::Uuid;
    ///
    /// let id = Uuid::nil();
    /// let key = Photo::storage_key_for(id, "Holiday.JPG");
    /// assert_eq!(key, "00000000-0000-0000-0000-000000000000.jpg");
    /// ```
    pub fn storage_key_for(id: Uuid, original_filename: &str) -> String {
        match extension_of(original_filename) {
            Some(ext) => format!("{}.{}", id, ext).to_lowercase(),
            None => id.to_string().to_lowercase(),
        }
    }
}

/// Input to the create operation: one file from a multipart upload,
/// fully buffered.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    /// Filename as supplied by the client.
    pub file_name: String,
    /// Declared content type of the file part.
    pub content_type: String,
    /// The image bytes.
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_key_lowercases_id_and_extension() {
        let id = Uuid::parse_str("8F14E45F-CEEA-4F3A-9A5B-6C2D3E4F5A6B").unwrap();
        let key = Photo::storage_key_for(id, "Photo.JPG");
        assert_eq!(key, "8f14e45f-ceea-4f3a-9a5b-6c2d3e4f5a6b.jpg");
    }

    #[test]
    fn storage_key_without_extension_is_just_the_id() {
        let id = Uuid::nil();
        assert_eq!(
            Photo::storage_key_for(id, "noextension"),
            "00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn distinct_ids_give_distinct_keys_for_same_filename() {
        let a = Photo::storage_key_for(Uuid::new_v4(), "photo.jpg");
        let b = Photo::storage_key_for(Uuid::new_v4(), "photo.JPG");
        assert_ne!(a, b);
    }
}
