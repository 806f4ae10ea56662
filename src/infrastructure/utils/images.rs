use std::{io, path::Path};

use derive_more::Display;
use infer::{Infer, MatcherType};
use tokio::fs;

/// Validates an uploaded photo for declared content type, sniffed content
/// and size, returning the extension to store it under (with leading dot,
/// or empty when none can be determined).
///
/// - `original_filename`: the filename from TempFile::file_name()
/// - `file_path`: the path from TempFile::file.path()
/// - `declared_type`: the MIME type the client declared for the part
/// - `max_size`: ceiling in bytes
pub async fn validate_image_file(
    original_filename: Option<&str>,
    file_path: &Path,
    declared_type: Option<&str>,
    max_size: u64,
) -> Result<String, ImageError> {
    // 1. The client must declare an image/* part, when it declares anything.
    if let Some(declared) = declared_type {
        if !declared.starts_with("image/") {
            return Err(ImageError::InvalidType(declared.to_string()));
        }
    }

    // 2. Content sniff (tolerant mode): reject only a positive non-image
    // match. Formats infer does not know, such as SVG, pass through on the
    // declared type alone.
    let sniffed = match Infer::new().get_from_path(file_path) {
        Ok(kind) => kind,
        Err(e) => return Err(ImageError::IoError(e)),
    };
    match &sniffed {
        Some(kind) if kind.matcher_type() != MatcherType::Image => {
            return Err(ImageError::InvalidType(kind.mime_type().to_string()));
        }
        None if declared_type.is_none() => {
            return Err(ImageError::InvalidType("unknown".to_string()));
        }
        _ => {}
    }

    // 3. Size ceiling.
    let metadata = fs::metadata(file_path).await.map_err(ImageError::IoError)?;
    if metadata.len() > max_size {
        return Err(ImageError::FileTooLarge);
    }

    // 4. Extension for the stored name: prefer the client filename, fall
    // back to the sniffed format.
    let from_name = original_filename
        .and_then(|name| Path::new(name).extension())
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    let extension = from_name.or_else(|| sniffed.map(|kind| kind.extension().to_string()));

    Ok(extension.map(|e| format!(".{e}")).unwrap_or_default())
}

/// All errors related to photo upload handling.
#[derive(Debug, Display)]
pub enum ImageError {
    #[display("Only image uploads are allowed (got {_0})")]
    InvalidType(String),

    #[display("Image exceeds the maximum allowed size")]
    FileTooLarge,

    #[display("Failed to read file: {_0}")]
    IoError(io::Error),
}
