//! Prescription upload handler.

use crate::core::upload;
use crate::errors::{Error, Result};
use crate::web::AppState;
use axum::{Json, extract::Multipart, extract::State};
use serde_json::{Value, json};

/// `POST /upload-prescription` - multipart upload with a `file` part.
///
/// A request without a `file` part (or with one lacking a file name) is the
/// one explicitly handled client error: `400 {"error": "No file provided"}`.
pub async fn upload_prescription(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let file_name = field
                .file_name()
                .map(ToString::to_string)
                .ok_or(Error::MissingFile)?;
            let bytes = field.bytes().await?;

            let path = upload::store_prescription(&state.upload_dir, &file_name, &bytes).await?;
            return Ok(Json(json!({
                "message": "Uploaded successfully",
                "path": path.display().to_string(),
            })));
        }
    }

    Err(Error::MissingFile)
}
