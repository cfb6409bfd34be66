use bytes::Bytes;

use crate::error::{Error, Result};

const PDF_MAGIC: &[u8] = b"%PDF";

pub fn is_pdf(bytes: &[u8], filename: Option<&str>, content_type: Option<&str>) -> bool {
    bytes.starts_with(PDF_MAGIC)
        || filename.is_some_and(|n| n.to_ascii_lowercase().ends_with(".pdf"))
        || content_type.is_some_and(|c| c.eq_ignore_ascii_case("application/pdf"))
}

/// Pulls plain text out of an uploaded document.
///
/// PDFs go through `pdf-extract`; anything else has to be UTF-8 text. The
/// result may be empty or whitespace, callers decide what that means.
pub fn extract_text(bytes: &[u8], filename: Option<&str>, content_type: Option<&str>) -> Result<String> {
    if is_pdf(bytes, filename, content_type) {
        return pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| Error::BadRequest(format!("PDF processing error: {}", e)));
    }

    String::from_utf8(bytes.to_vec())
        .map_err(|e| Error::BadRequest(format!("PDF processing error: {}", e)))
}

/// Runs [`extract_text`] on the blocking pool. A panic inside the PDF parser
/// is reported as a processing error rather than tearing down the request.
pub async fn extract_text_blocking(
    bytes: Bytes,
    filename: Option<String>,
    content_type: Option<String>,
) -> Result<String> {
    tokio::task::spawn_blocking(move || {
        extract_text(&bytes, filename.as_deref(), content_type.as_deref())
    })
    .await
    .map_err(|e| {
        tracing::warn!(error = %e, "text extraction task failed");
        Error::BadRequest(format!("PDF processing error: {}", e))
    })?
}
