use crate::errors::{AppError, AppResult};

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Pulls plain text out of an uploaded syllabus document.
#[derive(Clone, Copy, Debug, Default)]
pub struct SourceExtractor;

impl SourceExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Blocking. Call from `web::block` or `spawn_blocking`.
    pub fn extract(&self, bytes: &[u8]) -> AppResult<String> {
        if bytes.is_empty() {
            return Err(AppError::SourceExtraction("Uploaded file is empty".to_string()));
        }

        if !bytes.starts_with(PDF_MAGIC) {
            return Err(AppError::SourceExtraction(
                "Uploaded file is not a PDF document".to_string(),
            ));
        }

        // pdf-extract panics on some malformed inputs.
        let text = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
            .map_err(|_| {
                AppError::SourceExtraction("PDF parser aborted on a malformed document".to_string())
            })?
            .map_err(|e| AppError::SourceExtraction(format!("pdf-extract failed: {}", e)))?;

        if text.trim().is_empty() {
            return Err(AppError::SourceExtraction(
                "Document contains no extractable text".to_string(),
            ));
        }

        log::info!("Extracted {} characters from PDF", text.chars().count());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        let err = SourceExtractor::new().extract(&[]).unwrap_err();
        assert!(matches!(err, AppError::SourceExtraction(_)));
    }

    #[test]
    fn non_pdf_input_is_rejected() {
        let err = SourceExtractor::new()
            .extract(b"PK\x03\x04 not a pdf")
            .unwrap_err();
        assert!(err.to_string().contains("not a PDF"));
    }

    #[test]
    fn truncated_pdf_is_rejected() {
        let result = SourceExtractor::new().extract(b"%PDF-1.4\n1 0 obj\n<<");
        assert!(matches!(result, Err(AppError::SourceExtraction(_))));
    }
}
