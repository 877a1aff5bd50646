//! Handlers for file uploads (event flyers, resource files).
//!
//! Objects go straight to the configured object store; the database only
//! ever sees the returned public URL.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the upload endpoint.
#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    /// Key prefix to file the object under (default: `uploads`).
    pub folder: Option<String>,
}

/// Response body for a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub key: String,
    pub url: String,
}

/// POST /api/v1/uploads?folder=flyers
///
/// Accepts a multipart body with a `file` field, stores it under a
/// generated key, and returns the key and public URL.
pub async fn upload(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<UploadQuery>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let folder = params.folder.as_deref().unwrap_or("uploads");
    validate_folder(folder)?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;

        if bytes.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".into()));
        }

        let key = object_key(folder, &file_name);
        let url = state
            .storage
            .put(&key, bytes.to_vec(), &content_type)
            .await?;

        tracing::info!(key = %key, size = bytes.len(), "File uploaded");

        return Ok((
            StatusCode::CREATED,
            Json(DataResponse {
                data: UploadResponse { key, url },
            }),
        ));
    }

    Err(AppError::BadRequest("Missing multipart field 'file'".into()))
}

/// DELETE /api/v1/uploads/{key}
///
/// Remove an uploaded object by key.
pub async fn delete(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<StatusCode> {
    state.storage.delete(&key).await?;
    tracing::info!(key = %key, "File deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a collision-free object key, keeping the original extension.
fn object_key(folder: &str, file_name: &str) -> String {
    let id = Uuid::new_v4();
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("{folder}/{id}.{ext}"),
        _ => format!("{folder}/{id}"),
    }
}

/// Folders become key prefixes; only allow simple path-safe names.
fn validate_folder(folder: &str) -> AppResult<()> {
    let valid = !folder.is_empty()
        && folder
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Invalid folder name: {folder}"
        )))
    }
}
