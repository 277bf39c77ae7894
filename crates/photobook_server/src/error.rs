//! API error types and status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use photobook_error::{
    DatabaseErrorKind, IngestErrorKind, PhotobookError, PhotobookErrorKind, StorageErrorKind,
};
use serde::Serialize;

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request or non-image upload → 400
    BadRequest(String),
    /// No record for the requested id → 404
    NotFound(String),
    /// Record exists but its blob is gone → 404, distinct code
    StoreDivergence(String),
    /// Key or id collision → 409
    Conflict(String),
    /// Storage, database, or analyzer backend failed → 502
    Upstream(String),
    /// Anything else → 500
    Internal(String),
}

impl ApiError {
    /// Get the error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::NotFound(_) => "not_found",
            Self::StoreDivergence(_) => "blob_missing",
            Self::Conflict(_) => "conflict",
            Self::Upstream(_) => "upstream_error",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) | Self::StoreDivergence(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::BadRequest(m)
            | Self::NotFound(m)
            | Self::StoreDivergence(m)
            | Self::Conflict(m)
            | Self::Upstream(m)
            | Self::Internal(m) => m,
        }
    }
}

impl From<PhotobookError> for ApiError {
    fn from(err: PhotobookError) -> Self {
        match err.kind() {
            PhotobookErrorKind::Ingest(e) => match &e.kind {
                IngestErrorKind::InvalidUpload(m) => Self::BadRequest(m.clone()),
                IngestErrorKind::PhotoNotFound(id) => {
                    Self::NotFound(format!("no photo with id {}", id))
                }
                IngestErrorKind::BlobMissing(id) => {
                    Self::StoreDivergence(format!("photo {} has no stored content", id))
                }
            },
            PhotobookErrorKind::Storage(e) => match &e.kind {
                StorageErrorKind::AlreadyExists(key) => {
                    Self::Conflict(format!("blob already exists at {}", key))
                }
                _ => Self::Upstream(e.kind.to_string()),
            },
            PhotobookErrorKind::Database(e) => match &e.kind {
                DatabaseErrorKind::AlreadyExists(id) => {
                    Self::Conflict(format!("record already exists: {}", id))
                }
                DatabaseErrorKind::NotFound => Self::NotFound("record not found".to_string()),
                _ => Self::Upstream(e.kind.to_string()),
            },
            PhotobookErrorKind::Vision(e) => Self::Upstream(e.kind.to_string()),
            PhotobookErrorKind::Config(e) => Self::Internal(e.message.clone()),
            PhotobookErrorKind::Server(e) => Self::Internal(e.kind.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            code: self.code().to_string(),
            message: self.message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use photobook_error::{IngestError, StorageError, VisionError, VisionErrorKind};

    #[test]
    fn invalid_upload_maps_to_bad_request() {
        let err: PhotobookError =
            IngestError::new(IngestErrorKind::InvalidUpload("not an image".to_string())).into();
        let api = ApiError::from(err);
        assert_eq!(api.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(api.code(), "bad_request");
    }

    #[test]
    fn missing_photo_and_missing_blob_both_map_to_not_found() {
        let err: PhotobookError =
            IngestError::new(IngestErrorKind::PhotoNotFound("abc".to_string())).into();
        assert_eq!(ApiError::from(err).status_code(), StatusCode::NOT_FOUND);

        let err: PhotobookError =
            IngestError::new(IngestErrorKind::BlobMissing("abc".to_string())).into();
        let api = ApiError::from(err);
        assert_eq!(api.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(api.code(), "blob_missing");
    }

    #[test]
    fn key_collision_maps_to_conflict() {
        let err: PhotobookError =
            StorageError::new(StorageErrorKind::AlreadyExists("a.jpg".to_string())).into();
        assert_eq!(ApiError::from(err).status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn backend_failures_map_to_bad_gateway() {
        let err: PhotobookError =
            StorageError::new(StorageErrorKind::Unavailable("disk".to_string())).into();
        assert_eq!(ApiError::from(err).status_code(), StatusCode::BAD_GATEWAY);

        let err: PhotobookError =
            VisionError::new(VisionErrorKind::Http("down".to_string())).into();
        assert_eq!(ApiError::from(err).status_code(), StatusCode::BAD_GATEWAY);
    }
}
