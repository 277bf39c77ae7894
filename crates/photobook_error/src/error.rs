//! Top-level error wrapper types.

#[cfg(feature = "database")]
use crate::DatabaseError;
use crate::{ConfigError, IngestError, ServerError, StorageError, VisionError};

/// The foundation error enum. Each Photobook crate contributes the variant
/// for its own failure domain.
///
/// # Examples
///
/// ```
/// use photobook_error::{PhotobookError, StorageError, StorageErrorKind};
///
/// let storage_err = StorageError::new(StorageErrorKind::Unavailable("disk full".to_string()));
/// let err: PhotobookError = storage_err.into();
/// assert!(format!("{}", err).contains("Storage Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PhotobookErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Blob storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Content analysis error
    #[from(VisionError)]
    Vision(VisionError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Ingestion pipeline error
    #[from(IngestError)]
    Ingest(IngestError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Photobook error with kind discrimination.
///
/// # Examples
///
/// ```
/// use photobook_error::{PhotobookResult, ConfigError};
///
/// fn might_fail() -> PhotobookResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Photobook Error: {}", _0)]
pub struct PhotobookError(Box<PhotobookErrorKind>);

impl PhotobookError {
    /// Create a new error from a kind.
    pub fn new(kind: PhotobookErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PhotobookErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to PhotobookErrorKind
impl<T> From<T> for PhotobookError
where
    T: Into<PhotobookErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Photobook operations.
///
/// # Examples
///
/// ```
/// use photobook_error::{PhotobookResult, ConfigError};
///
/// fn load() -> PhotobookResult<String> {
///     Err(ConfigError::new("VISION_ENDPOINT not set"))?
/// }
/// ```
pub type PhotobookResult<T> = std::result::Result<T, PhotobookError>;
