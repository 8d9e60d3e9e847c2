use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::dto::{request::UploadRequest, response::UploadResponse},
};

/// Plain-text document conversion for the upload endpoint. No storage; the
/// decoded text goes straight back to the caller.
pub struct ExtractService {
    preview_chars: usize,
}

impl ExtractService {
    pub fn new(preview_chars: usize) -> Self {
        Self { preview_chars }
    }

    pub fn extract(&self, request: UploadRequest) -> AppResult<UploadResponse> {
        request.validate()?;

        let content_type = content_type_for(&request.filename)?;

        let bytes = BASE64.decode(request.data.as_bytes()).map_err(|e| {
            AppError::ValidationError(format!("file data is not valid base64: {e}"))
        })?;

        let text = String::from_utf8(bytes).map_err(|_| {
            AppError::ValidationError("file is not valid UTF-8 text".to_string())
        })?;

        let (content, truncated) = truncate_chars(&text, self.preview_chars);

        log::info!(
            "Extracted {} characters from '{}' ({})",
            content.chars().count(),
            request.filename,
            content_type
        );

        Ok(UploadResponse {
            filename: request.filename,
            content_type: content_type.to_string(),
            content,
            truncated,
        })
    }
}

fn content_type_for(filename: &str) -> AppResult<&'static str> {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "txt" => Ok("text/plain"),
        "md" => Ok("text/markdown"),
        "csv" => Ok("text/csv"),
        _ => Err(AppError::ValidationError(format!(
            "unsupported file type '.{extension}': only .txt, .md and .csv documents are supported"
        ))),
    }
}

fn truncate_chars(text: &str, limit: usize) -> (String, bool) {
    let mut indices = text.char_indices();
    match indices.nth(limit) {
        Some((byte_index, _)) => (text[..byte_index].to_string(), true),
        None => (text.to_string(), false),
    }
}
