//! Content analysis error types.

/// Kinds of content analysis errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum VisionErrorKind {
    /// Client configuration is missing or invalid
    #[display("Invalid analyzer configuration: {}", _0)]
    Configuration(String),
    /// Transport-level failure reaching the analyzer
    #[display("Analyzer request failed: {}", _0)]
    Http(String),
    /// The analyzer answered with a non-success status
    #[display("Analyzer API error (status {}): {}", status, message)]
    Api {
        /// HTTP status returned by the analyzer
        status: u16,
        /// Response body text, if any
        message: String,
    },
    /// The analyzer response could not be decoded
    #[display("Invalid analyzer response: {}", _0)]
    InvalidResponse(String),
}

/// Content analysis error with location tracking.
///
/// # Examples
///
/// ```
/// use photobook_error::{VisionError, VisionErrorKind};
///
/// let err = VisionError::new(VisionErrorKind::Http("connection refused".to_string()));
/// assert!(format!("{}", err).contains("connection refused"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Vision Error: {} at line {} in {}", kind, line, file)]
pub struct VisionError {
    /// The kind of error that occurred
    pub kind: VisionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl VisionError {
    /// Create a new VisionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: VisionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
