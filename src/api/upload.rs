use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::auth::middleware::AdminSession;
use crate::error::AppError;
use crate::state::AppState;
use crate::storage::client::IMMUTABLE_CACHE;
use crate::storage::images::{content_type_for, delete_image, image_key, upload_image, ImageNamespace, UploadedImage};

/// Largest accepted upload body.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// `POST /api/v1/admin/upload/{namespace}`
///
/// Accepts a multipart form with a single file field named "file".
pub async fn upload_image_handler(
    session: AdminSession,
    State(state): State<AppState>,
    Path(namespace): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<UploadedImage>, AppError> {
    let namespace: ImageNamespace = namespace.parse()?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Multipart error: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload.bin").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read file: {e}")))?;

        let uploaded = upload_image(
            state.storage.as_ref(),
            namespace,
            &file_name,
            &content_type,
            data.to_vec(),
        )
        .await?;
        tracing::info!(key = %uploaded.key, admin = %session.email, "Image uploaded");

        return Ok(Json(uploaded));
    }

    Err(AppError::BadRequest("No file field found in request".into()))
}

/// `GET /api/v1/image/{namespace}/{file}`
///
/// Serves an image from storage with a content type inferred from its name.
pub async fn serve_image_handler(
    State(state): State<AppState>,
    Path((namespace, file)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let namespace: ImageNamespace = namespace.parse()?;
    let key = image_key(namespace, &file)?;

    let data = state
        .storage
        .get_object(&key)
        .await?
        .ok_or_else(|| AppError::NotFound("Image not found".into()))?;

    Ok((
        [
            (header::CONTENT_TYPE, content_type_for(&file)),
            (header::CACHE_CONTROL, IMMUTABLE_CACHE),
        ],
        data,
    )
        .into_response())
}

/// `DELETE /api/v1/admin/image/{namespace}/{file}`
pub async fn delete_image_handler(
    session: AdminSession,
    State(state): State<AppState>,
    Path((namespace, file)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let namespace: ImageNamespace = namespace.parse()?;
    delete_image(state.storage.as_ref(), namespace, &file).await?;
    tracing::info!(namespace = %namespace, file = %file, admin = %session.email, "Image deleted");
    Ok(StatusCode::NO_CONTENT)
}
