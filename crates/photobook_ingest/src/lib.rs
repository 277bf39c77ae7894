//! Ingestion pipeline and listing service for Photobook.
//!
//! This crate is the core of the system: the ordered coordination of
//! validation, content analysis, blob storage, and metadata persistence
//! for a single photo. The pipeline holds its three collaborators behind
//! trait seams and enforces the step ordering that keeps the blob store
//! and the metadata store in lockstep:
//!
//! - create: validate, caption (best-effort), write blob, insert record.
//!   A record is never visible unless its blob is retrievable.
//! - delete: look up record, delete blob, delete record. A failure
//!   between steps leaves a detectable dangling record, never an
//!   undiscoverable orphan blob.
//! - fetch: look up record, read blob. A record whose blob is missing is
//!   surfaced as store divergence, not masked as empty content.
//!
//! There is no cross-request locking; concurrent operations on the same
//! id may race, and the contract is eventually consistent per id.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod pipeline;

pub use catalog::PhotoCatalog;
pub use pipeline::{PhotoContent, PhotoPipeline};
