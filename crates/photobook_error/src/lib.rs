//! Error types for the Photobook service.
//!
//! This crate provides the foundation error types used throughout the
//! Photobook workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use photobook_error::{PhotobookResult, ConfigError};
//!
//! fn load_setting() -> PhotobookResult<String> {
//!     Err(ConfigError::new("PHOTOBOOK_BIND_ADDR not set"))?
//! }
//!
//! match load_setting() {
//!     Ok(value) => println!("Got: {}", value),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
#[cfg(feature = "database")]
mod database;
mod error;
mod ingest;
mod server;
mod storage;
mod vision;

pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{PhotobookError, PhotobookErrorKind, PhotobookResult};
pub use ingest::{IngestError, IngestErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use vision::{VisionError, VisionErrorKind};
