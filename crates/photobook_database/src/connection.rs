//! Database connection utilities.

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use photobook_error::{DatabaseError, DatabaseErrorKind, PhotobookResult};

/// Shared r2d2 connection pool.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Compose the database URL from the environment.
///
/// `DATABASE_URL` takes precedence; otherwise the URL is composed from
/// `DATABASE_USER`, `DATABASE_PASSWORD` (both required), `DATABASE_HOST`,
/// `DATABASE_PORT`, and `DATABASE_NAME` (defaulted). A `.env` file is
/// honored.
fn database_url() -> Result<String, DatabaseError> {
    let _ = dotenvy::dotenv();

    if let Ok(database_url) = std::env::var("DATABASE_URL") {
        return Ok(database_url);
    }

    let user = std::env::var("DATABASE_USER").map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::Connection(
            "DATABASE_USER environment variable not set".to_string(),
        ))
    })?;

    let password = std::env::var("DATABASE_PASSWORD").map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::Connection(
            "DATABASE_PASSWORD environment variable not set".to_string(),
        ))
    })?;

    let host = std::env::var("DATABASE_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = std::env::var("DATABASE_PORT").unwrap_or_else(|_| "5432".to_string());
    let name = std::env::var("DATABASE_NAME").unwrap_or_else(|_| "photobook".to_string());

    Ok(format!(
        "postgres://{}:{}@{}:{}/{}",
        user, password, host, port, name
    ))
}

/// Establish a single connection to the PostgreSQL database.
///
/// # Errors
///
/// Returns an error if the URL cannot be composed from the environment or
/// the connection fails.
pub fn establish_connection() -> PhotobookResult<PgConnection> {
    let url = database_url()?;
    PgConnection::establish(&url)
        .map_err(DatabaseError::from)
        .map_err(Into::into)
}

/// Build an r2d2 connection pool from the environment.
///
/// # Errors
///
/// Returns an error if the URL cannot be composed or the pool cannot
/// create its initial connections.
pub fn build_pool() -> PhotobookResult<PgPool> {
    let url = database_url()?;
    let manager = ConnectionManager::<PgConnection>::new(url);
    Pool::builder()
        .build(manager)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Pool(e.to_string())).into())
}

/// Run any pending embedded migrations.
///
/// Called once at startup so a fresh database serves its first request
/// with the schema in place.
pub fn run_pending_migrations(conn: &mut PgConnection) -> PhotobookResult<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Migration(e.to_string())))?;

    for migration in &applied {
        tracing::info!(migration = %migration, "Applied migration");
    }
    Ok(())
}
