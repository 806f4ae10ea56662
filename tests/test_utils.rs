#![allow(dead_code)]

use std::path::Path;

use actix_web::web;
use resume_backend::settings::{AppConfig, AppEnvironment};
use resume_backend::AppState;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-0123456789abcdef";

pub fn test_config(data_dir: &Path, upload_dir: &Path, read_only: bool) -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Resume-API".into(),
        host: "127.0.0.1".into(),
        port: 0,
        worker_count: 1,
        data_dir: data_dir.to_path_buf(),
        upload_dir: upload_dir.to_path_buf(),
        admin_username: "admin".into(),
        admin_password: "admin123".into(),
        jwt_secret: TEST_JWT_SECRET.into(),
        token_ttl_hours: 24,
        read_only,
    }
}

pub fn app_state(config: &AppConfig) -> web::Data<AppState> {
    web::Data::new(AppState::new(config))
}

/// Builds a single-file multipart/form-data payload by hand, the way a
/// browser would encode the upload form.
pub fn multipart_payload(
    field: &str,
    filename: &str,
    content_type: &str,
    bytes: &[u8],
) -> (String, Vec<u8>) {
    let boundary = "----resume-backend-test-boundary";

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    (
        format!("multipart/form-data; boundary={boundary}"),
        body,
    )
}
