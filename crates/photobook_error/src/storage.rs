//! Blob storage error types.

/// Kinds of blob storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create the storage directory
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write a blob
    #[display("Failed to write blob: {}", _0)]
    Write(String),
    /// Failed to read a blob
    #[display("Failed to read blob: {}", _0)]
    Read(String),
    /// A blob already exists at the key and overwrite was not requested
    #[display("Blob already exists at key: {}", _0)]
    AlreadyExists(String),
    /// The key is not usable by the backend
    #[display("Invalid storage key: {}", _0)]
    InvalidKey(String),
    /// Storage backend is unavailable
    #[display("Storage unavailable: {}", _0)]
    Unavailable(String),
}

/// Blob storage error with location tracking.
///
/// # Examples
///
/// ```
/// use photobook_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::AlreadyExists("abc.jpg".to_string()));
/// assert!(format!("{}", err).contains("already exists"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
