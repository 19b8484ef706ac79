use std::path::Path;

use tracing::error;

/// Text of every page in document order, pages appended back to back.
/// A torn or non-PDF file degrades to an empty string.
pub(super) fn extract(path: &Path) -> String {
    match pdf_extract::extract_text(path) {
        Ok(text) => text,
        Err(e) => {
            error!("Error extracting text from PDF {}: {e}", path.display());
            String::new()
        }
    }
}
