//! Domain types for the Photobook service.
//!
//! This crate defines the `Photo` record, the upload input type, and the
//! image-kind rules (accepted content types and extensions, storage-key
//! derivation, MIME resolution). It carries no I/O; the storage, database,
//! and analysis crates all build on these types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod image_kind;
mod photo;

pub use image_kind::{extension_of, is_image, mime_for_filename};
pub use photo::{Photo, PhotoUpload};
