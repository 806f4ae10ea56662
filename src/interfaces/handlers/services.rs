use actix_web::{delete, get, post, web, HttpResponse, Responder};

use crate::entities::service::Service;
use crate::errors::AppError;
use crate::AppState;

#[get("/services")]
pub async fn list_services(state: web::Data<AppState>) -> impl Responder {
    let services = state.content.services().await;
    HttpResponse::Ok().json(services)
}

#[post("/services")]
pub async fn create_service(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    state.content.ensure_writable()?;

    let service: Service = serde_json::from_slice(&body)
        .map_err(|e| AppError::InvalidInput(format!("Malformed service: {}", e)))?;

    state.content.add_service(service).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({ "success": true })))
}

#[delete("/services/{id}")]
pub async fn delete_service(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    state.content.remove_service(&id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
