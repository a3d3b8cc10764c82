//! HTTP handler for the photo upload endpoint.
//!
//! Pulls `photos` parts out of the multipart body and delegates the batch to
//! `UploadService`. Presence is the only validation performed here: content
//! type and size are not inspected.

use crate::{
    errors::AppError,
    models::photo::{UploadItem, UploadResponse},
    services::upload_service::UploadService,
};
use axum::{
    Json,
    extract::{Multipart, State},
};

/// Multipart field name carrying photo files. Parts under any other name are
/// ignored.
const PHOTOS_FIELD: &str = "photos";

/// `POST /api/photos`
///
/// Store every uploaded photo, then forward the resulting references to the
/// companion listener.
pub async fn upload_photos(
    State(service): State<UploadService>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut items = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::internal(format!("reading multipart body: {err}")))?
    {
        if field.name() != Some(PHOTOS_FIELD) {
            continue;
        }

        let name = field
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| "photo".to_string());
        let content = field
            .bytes()
            .await
            .map_err(|err| AppError::internal(format!("reading part `{name}`: {err}")))?;

        items.push(UploadItem { name, content });
    }

    let photos = service.upload_batch(items).await?;

    Ok(Json(UploadResponse {
        success: true,
        photos,
    }))
}
