use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::errors::AuthError;

pub fn json_error(status: StatusCode, error: &str) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({
        "error": error
    }))
}

/// Login/logout responses carry an explicit success flag alongside the error.
pub fn handle_auth_error(e: AuthError) -> HttpResponse {
    HttpResponse::build(e.status_code()).json(serde_json::json!({
        "success": false,
        "error": e.to_string()
    }))
}
