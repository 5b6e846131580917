//! PDF text extraction.
//!
//! Opens uploaded document bytes as a paginated PDF and concatenates the
//! extracted text of every page in document order. No per-page error
//! isolation: a malformed document fails the whole extraction.

use crate::error::{Result, VoxlateError};
use crate::temp::TempArtifact;
use pdf_oxide::PdfDocument;

/// Extract the concatenated page text of a PDF.
///
/// Returns [`VoxlateError::DocumentExtraction`] for a malformed document and
/// [`VoxlateError::EmptyDocument`] when the document parses but carries no
/// extractable text.
pub fn extract_text(document_bytes: &[u8], filename: &str) -> Result<String> {
    // pdf_oxide opens from a path, so stage the bytes in a scoped temp file.
    let staged = TempArtifact::from_bytes(document_bytes, ".pdf")?;

    let mut doc = PdfDocument::open(staged.path()).map_err(|e| {
        VoxlateError::DocumentExtraction {
            message: format!("failed to parse PDF: {}", e),
        }
    })?;

    let page_count = doc
        .page_count()
        .map_err(|e| VoxlateError::DocumentExtraction {
            message: format!("failed to read page count: {}", e),
        })?;

    let mut text = String::new();
    for page_index in 0..page_count {
        let page_text =
            doc.extract_text(page_index)
                .map_err(|e| VoxlateError::DocumentExtraction {
                    message: format!("failed to extract page {}: {}", page_index + 1, e),
                })?;
        text.push_str(&page_text);
    }

    tracing::info!(page_count, chars = text.len(), "PDF text extraction complete");

    if text.trim().is_empty() {
        return Err(VoxlateError::EmptyDocument {
            filename: filename.to_string(),
        });
    }

    Ok(text)
}
