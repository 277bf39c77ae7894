//! Diesel row models for the `photos` table.

use crate::schema::photos;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use photobook_core::Photo;
use uuid::Uuid;

/// One row of the `photos` table.
///
/// Field-for-field the same shape as [`Photo`]; the split keeps Diesel
/// derives out of the domain crate.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = photos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PhotoRow {
    /// Primary key.
    pub id: Uuid,
    /// Client-supplied filename.
    pub original_filename: String,
    /// Derived blob name.
    pub storage_key: String,
    /// Optional caption.
    pub description: Option<String>,
    /// Creation timestamp.
    pub uploaded_at: DateTime<Utc>,
}

impl From<PhotoRow> for Photo {
    fn from(row: PhotoRow) -> Self {
        Photo {
            id: row.id,
            original_filename: row.original_filename,
            storage_key: row.storage_key,
            description: row.description,
            uploaded_at: row.uploaded_at,
        }
    }
}

impl From<&Photo> for PhotoRow {
    fn from(photo: &Photo) -> Self {
        PhotoRow {
            id: photo.id,
            original_filename: photo.original_filename.clone(),
            storage_key: photo.storage_key.clone(),
            description: photo.description.clone(),
            uploaded_at: photo.uploaded_at,
        }
    }
}
