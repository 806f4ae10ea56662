use actix_multipart::form::MultipartForm;
use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use chrono::Utc;
use tokio::fs;

use crate::constants::MAX_PHOTO_BYTES;
use crate::entities::upload::{PhotoUploadForm, UploadResponse};
use crate::handlers::json_error::json_error;
use crate::utils::images::{validate_image_file, ImageError};
use crate::AppState;

/// Accepts a multipart photo, stores it under the public upload directory
/// with a timestamp-derived name and returns the resulting URL. No
/// deduplication and no cleanup of earlier uploads.
#[post("/upload")]
pub async fn upload_photo(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<PhotoUploadForm>,
) -> impl Responder {
    let file = form.file;

    let declared = file.content_type.as_ref().map(|m| m.essence_str().to_string());

    let extension = match validate_image_file(
        file.file_name.as_deref(),
        file.file.path(),
        declared.as_deref(),
        MAX_PHOTO_BYTES as u64,
    )
    .await
    {
        Ok(extension) => extension,
        Err(ImageError::IoError(e)) => {
            tracing::error!("failed to inspect uploaded file: {}", e);
            return json_error(StatusCode::INTERNAL_SERVER_ERROR, "Upload failed");
        }
        Err(e) => return json_error(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    let upload_dir = &state.config.upload_dir;
    if let Err(e) = fs::create_dir_all(upload_dir).await {
        tracing::error!("failed to create upload directory: {}", e);
        return json_error(StatusCode::INTERNAL_SERVER_ERROR, "Upload failed");
    }

    let file_name = format!("photo_{}{}", Utc::now().timestamp_millis(), extension);
    let destination = upload_dir.join(&file_name);

    if let Err(e) = fs::copy(file.file.path(), &destination).await {
        tracing::error!("failed to store uploaded file: {}", e);
        return json_error(StatusCode::INTERNAL_SERVER_ERROR, "Upload failed");
    }

    tracing::info!(file = %file_name, size = file.size, "photo uploaded");

    HttpResponse::Ok().json(UploadResponse {
        success: true,
        url: format!("/uploads/{file_name}"),
        file_name,
    })
}
