//! HTTP server error types.

/// Kinds of server errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ServerErrorKind {
    /// Failed to bind or serve on the configured address
    #[display("Server failed to start: {}", _0)]
    Startup(String),
    /// Observability pipeline could not be initialized
    #[display("Observability init failed: {}", _0)]
    Observability(String),
}

/// Server error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Server Error: {} at line {} in {}", kind, line, file)]
pub struct ServerError {
    /// The kind of error that occurred
    pub kind: ServerErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ServerError {
    /// Create a new ServerError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
