//! Product image upload handler.
//!
//! Accepts a multipart form with a single `image` file field, stores the
//! bytes under the upload directory with a fresh name, and returns the URL
//! the static mount serves it from. Nothing beyond the file path is
//! recorded.

use axum::{
    Json,
    extract::{Multipart, State},
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Longest accepted filename extension.
const MAX_EXTENSION_LEN: usize = 8;

/// Successful upload response.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Store an uploaded product image.
///
/// # Errors
///
/// Returns 400 when the `image` field is missing or empty or its filename
/// has no usable extension, 500 if the bytes cannot be written.
pub async fn upload_image(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid upload: {e}")))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let extension = field
            .file_name()
            .and_then(sanitized_extension)
            .ok_or_else(|| AppError::BadRequest("Invalid image filename".to_owned()))?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid upload: {e}")))?;
        if data.is_empty() {
            return Err(AppError::BadRequest("Uploaded image is empty".to_owned()));
        }

        let filename = format!("{}.{extension}", Uuid::new_v4());
        let dest = state.config().upload_dir.join(&filename);
        tokio::fs::write(&dest, &data)
            .await
            .map_err(|e| AppError::Internal(format!("failed to store upload: {e}")))?;

        tracing::info!(file = %filename, bytes = data.len(), "image uploaded");

        return Ok(Json(UploadResponse {
            image_url: format!("/uploads/{filename}"),
        }));
    }

    Err(AppError::BadRequest("Missing image field".to_owned()))
}

/// Extract a lowercase alphanumeric extension from a client filename.
///
/// The client name is otherwise untrusted and discarded; only the extension
/// survives, so stored names can never traverse out of the upload dir.
fn sanitized_extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    if ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(ext)
}
