//! Document text extraction for uploaded resumes.


use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unreadable document: {0}")]
    Unreadable(String),

    #[error("document contains no extractable text")]
    NoText,
}

/// Converts an uploaded document into plain text.
///
/// Implementations are synchronous and may be CPU-heavy; callers run them on
/// the blocking pool. Carried in `AppState` as `Arc<dyn DocumentExtractor>`.
pub trait DocumentExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}

/// Extracts text from PDF bytes with `pdf-extract`.
pub struct PdfTextExtractor;

impl DocumentExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Unreadable(e.to_string()))?;
        non_empty(text)
    }
}

/// Trims extracted text and rejects documents that yielded nothing.
pub fn non_empty(text: String) -> Result<String, ExtractError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::NoText);
    }
    Ok(trimmed.to_string())
}

/// True if the uploaded file name carries a `.pdf` extension, in any case.
pub fn is_pdf_file_name(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(".pdf")
}
