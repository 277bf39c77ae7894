//! Ingestion pipeline error types.

/// Kinds of ingestion pipeline errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum IngestErrorKind {
    /// The upload is not an acceptable image
    #[display("Invalid upload: {}", _0)]
    InvalidUpload(String),
    /// No photo record exists for the requested id
    #[display("Photo not found: {}", _0)]
    PhotoNotFound(String),
    /// A photo record exists but its blob is missing from storage
    #[display("Blob missing for photo {}: stores have diverged", _0)]
    BlobMissing(String),
}

/// Ingestion pipeline error with location tracking.
///
/// # Examples
///
/// ```
/// use photobook_error::{IngestError, IngestErrorKind};
///
/// let err = IngestError::new(IngestErrorKind::InvalidUpload("not an image".to_string()));
/// assert!(format!("{}", err).contains("Invalid upload"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Ingest Error: {} at line {} in {}", kind, line, file)]
pub struct IngestError {
    /// The kind of error that occurred
    pub kind: IngestErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl IngestError {
    /// Create a new IngestError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: IngestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
