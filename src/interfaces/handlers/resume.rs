use actix_web::{get, put, web, HttpResponse, Responder};

use crate::entities::resume::ResumeData;
use crate::errors::AppError;
use crate::AppState;

#[get("/resume")]
pub async fn get_resume(state: web::Data<AppState>) -> impl Responder {
    let doc = state.content.resume().await;
    HttpResponse::Ok().json(doc)
}

/// Replaces the whole document. The write gate runs before the payload is
/// parsed, so a read-only deployment answers 403 for any body whatsoever.
#[put("/resume")]
pub async fn update_resume(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    state.content.ensure_writable()?;

    let doc: ResumeData = serde_json::from_slice(&body)
        .map_err(|e| AppError::InvalidInput(format!("Malformed resume document: {}", e)))?;

    state.content.replace_resume(doc).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
