use crate::{Error, Result};
use axum::body::Bytes;

pub const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Fallback when the multipart part carries no Content-Type.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// A file exactly as the client submitted it. Lives for one request.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    /// Client-declared, never sniffed.
    pub content_type: String,
    pub bytes: Bytes,
}

/// Checks the extension after the last dot, case-insensitively.
pub fn is_allowed_file(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

pub fn check_selection(upload: Option<Upload>) -> Result<Upload> {
    let upload = upload.ok_or(Error::NoFileSelected)?;

    if upload.file_name.is_empty() {
        return Err(Error::NoFileSelected);
    }

    if !is_allowed_file(&upload.file_name) {
        return Err(Error::UnsupportedFormat {
            file_name: upload.file_name,
        });
    }

    Ok(upload)
}

/// Decodes the whole image to prove the bytes are loadable. The decoded pixels are dropped.
pub async fn check_decodable(bytes: Bytes) -> Result<()> {
    tokio::task::spawn_blocking(move || image::load_from_memory(&bytes).map(|_| ()))
        .await
        .map_err(|e| Error::internal(format!("image decode task failed: {}", e)))??;
    Ok(())
}
