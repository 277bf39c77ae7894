//! PhotoRepository trait and its PostgreSQL implementation.

use crate::connection::PgPool;
use crate::models::PhotoRow;
use crate::schema::photos;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use photobook_core::Photo;
use photobook_error::{DatabaseError, DatabaseErrorKind, PhotobookResult};
use uuid::Uuid;

/// Persistence seam for photo records.
///
/// Records are immutable: there is no update operation, only insert,
/// point lookup, delete, and an ordered scan.
#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// Insert a new record. The id must not already exist.
    async fn insert(&self, photo: &Photo) -> PhotobookResult<()>;

    /// Look up a record by id.
    async fn find_by_id(&self, id: Uuid) -> PhotobookResult<Option<Photo>>;

    /// Delete the record with the given id, if present.
    async fn delete(&self, id: Uuid) -> PhotobookResult<()>;

    /// All records, ordered by original filename ascending.
    async fn list_all(&self) -> PhotobookResult<Vec<Photo>>;
}

/// Database-backed photo repository.
///
/// Diesel queries are blocking, so each call checks a connection out of
/// the pool and runs on the blocking thread pool.
#[derive(Clone)]
pub struct PostgresPhotoRepository {
    pool: PgPool,
}

impl PostgresPhotoRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn checkout(pool: &PgPool) -> Result<
    diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<PgConnection>>,
    DatabaseError,
> {
    pool.get()
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Pool(e.to_string())))
}

fn join_error(e: tokio::task::JoinError) -> DatabaseError {
    DatabaseError::new(DatabaseErrorKind::Query(e.to_string()))
}

#[async_trait]
impl PhotoRepository for PostgresPhotoRepository {
    #[tracing::instrument(skip(self, photo), fields(id = %photo.id))]
    async fn insert(&self, photo: &Photo) -> PhotobookResult<()> {
        let pool = self.pool.clone();
        let row = PhotoRow::from(photo);

        tokio::task::spawn_blocking(move || -> Result<(), DatabaseError> {
            let mut conn = checkout(&pool)?;
            diesel::insert_into(photos::table)
                .values(&row)
                .execute(&mut conn)
                .map_err(DatabaseError::from)?;
            Ok(())
        })
        .await
        .map_err(join_error)??;

        Ok(())
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn find_by_id(&self, id: Uuid) -> PhotobookResult<Option<Photo>> {
        let pool = self.pool.clone();

        let row = tokio::task::spawn_blocking(move || -> Result<Option<PhotoRow>, DatabaseError> {
            let mut conn = checkout(&pool)?;
            photos::table
                .find(id)
                .select(PhotoRow::as_select())
                .first(&mut conn)
                .optional()
                .map_err(DatabaseError::from)
        })
        .await
        .map_err(join_error)??;

        Ok(row.map(Photo::from))
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: Uuid) -> PhotobookResult<()> {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || -> Result<(), DatabaseError> {
            let mut conn = checkout(&pool)?;
            diesel::delete(photos::table.find(id))
                .execute(&mut conn)
                .map_err(DatabaseError::from)?;
            Ok(())
        })
        .await
        .map_err(join_error)??;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn list_all(&self) -> PhotobookResult<Vec<Photo>> {
        let pool = self.pool.clone();

        let rows = tokio::task::spawn_blocking(move || -> Result<Vec<PhotoRow>, DatabaseError> {
            let mut conn = checkout(&pool)?;
            photos::table
                .order(photos::original_filename.asc())
                .select(PhotoRow::as_select())
                .load(&mut conn)
                .map_err(DatabaseError::from)
        })
        .await
        .map_err(join_error)??;

        Ok(rows.into_iter().map(Photo::from).collect())
    }
}
