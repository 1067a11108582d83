//! PDF text extraction and cleaning.

use crate::errors::AppError;

/// Extracts all page text from an in-memory PDF.
pub fn pdf_to_text(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| AppError::PdfExtraction(e.to_string()))
}

/// Cleans extracted text: strips per-line whitespace and drops empty lines,
/// preserving line order.
pub fn clean_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_strips_line_whitespace() {
        assert_eq!(clean_text("  Jane Doe  \n\tEngineer\t"), "Jane Doe\nEngineer");
    }

    #[test]
    fn test_clean_text_drops_empty_lines() {
        assert_eq!(
            clean_text("Jane Doe\n\n\n   \nEngineer\n"),
            "Jane Doe\nEngineer"
        );
    }

    #[test]
    fn test_clean_text_preserves_line_order() {
        assert_eq!(clean_text("c\n\na\n\nb"), "c\na\nb");
    }

    #[test]
    fn test_clean_text_whitespace_only_input_is_empty() {
        assert_eq!(clean_text("  \n \t \n"), "");
    }

    #[test]
    fn test_pdf_to_text_rejects_garbage_bytes() {
        assert!(pdf_to_text(b"definitely not a pdf").is_err());
    }
}
