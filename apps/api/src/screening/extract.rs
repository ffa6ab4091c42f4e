//! Resume text extraction from uploaded documents.

use crate::errors::AppError;

/// Extracts plain text from an uploaded resume.
///
/// PDFs are sniffed by the `%PDF` magic and handed to `pdf-extract`; any
/// other upload is accepted as UTF-8 plain text. Binary formats we cannot
/// decode are rejected as a validation failure, not a server error.
pub fn extract_resume_text(filename: &str, data: &[u8]) -> Result<String, AppError> {
    if data.starts_with(b"%PDF") {
        let text = pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::Parse(format!("Failed to parse resume '{filename}': {e}")))?;
        return Ok(text);
    }

    match std::str::from_utf8(data) {
        Ok(text) => Ok(text.to_string()),
        Err(_) => Err(AppError::Parse(format!(
            "Unsupported resume format for '{filename}': upload a PDF or plain-text file"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let data = "Jane Doe\nRust engineer, 5 years.".as_bytes();
        let text = extract_resume_text("resume.txt", data).unwrap();
        assert!(text.contains("Rust engineer"));
    }

    #[test]
    fn test_undecodable_binary_is_rejected() {
        let data = [0xff, 0xfe, 0x00, 0x01, 0x80];
        let err = extract_resume_text("resume.docx", &data).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_truncated_pdf_is_a_parse_error() {
        let err = extract_resume_text("resume.pdf", b"%PDF-1.7 truncated").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }
}
