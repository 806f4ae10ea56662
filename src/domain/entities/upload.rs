use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use serde::Serialize;

#[derive(Debug, MultipartForm)]
pub struct PhotoUploadForm {
    #[multipart(rename = "file")]
    pub file: TempFile,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
    pub file_name: String,
}
