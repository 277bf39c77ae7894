//! Request handlers for the photos resource.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use photobook_core::PhotoUpload;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

/// Health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// `GET /photos`: all records, ordered by original filename.
#[instrument(skip(state))]
pub async fn list_photos(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let photos = state.catalog.list().await?;
    Ok(Json(photos))
}

/// `GET /photos/:id`: the photo binary with its resolved content type.
#[instrument(skip(state), fields(id = %id))]
pub async fn get_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let content = state.pipeline.fetch(id).await?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, content.mime_type)],
        content.bytes,
    ))
}

/// `POST /photos`: multipart upload with a single `file` field.
#[instrument(skip(state, multipart))]
pub async fn upload_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<impl IntoResponse> {
    let mut upload: Option<PhotoUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Multipart error: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let file_name = field
                    .file_name()
                    .ok_or_else(|| {
                        ApiError::BadRequest("File field must have a filename".to_string())
                    })?
                    .to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Upload read error: {e}")))?;

                upload = Some(PhotoUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {} // Ignore unknown fields.
        }
    }

    let upload =
        upload.ok_or_else(|| ApiError::BadRequest("Missing 'file' field".to_string()))?;

    let photo = state.pipeline.create(upload).await?;
    let location = format!("/photos/{}", photo.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(photo),
    ))
}

/// `DELETE /photos/:id`.
#[instrument(skip(state), fields(id = %id))]
pub async fn delete_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    state.pipeline.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
