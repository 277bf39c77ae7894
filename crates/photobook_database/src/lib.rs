//! PostgreSQL metadata store for Photobook.
//!
//! Photo records live in the `photos` table; the binaries they reference
//! live in blob storage. This crate owns the schema, the row models, the
//! connection pool, embedded migrations, and the `PhotoRepository`
//! implementation the ingestion pipeline talks to.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod connection;
mod models;
mod photo_repository;
pub(crate) mod schema;

pub use connection::{build_pool, establish_connection, run_pending_migrations, PgPool};
pub use models::PhotoRow;
pub use photo_repository::{PhotoRepository, PostgresPhotoRepository};
pub use photobook_error::{DatabaseError, DatabaseErrorKind};
