//! Best-effort text extraction from uploaded documents.
//!
//! Extraction never fails to the caller: any open/parse/read error is logged
//! and whatever text was accumulated so far (usually nothing) is returned.
//! Callers cannot distinguish "truly empty document" from "extraction failed";
//! the downstream checks treat both as empty content.

mod docx;
mod pdf;

use std::path::Path;

use tracing::error;

/// Declared format of an uploaded document, derived from the filename
/// extension. Anything unrecognized is read as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => DocumentFormat::Pdf,
            "docx" => DocumentFormat::Docx,
            _ => DocumentFormat::PlainText,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(DocumentFormat::PlainText)
    }
}

/// Extracts the plain-text content of the file at `path`.
pub fn extract_text(path: &Path, format: DocumentFormat) -> String {
    match format {
        DocumentFormat::Pdf => pdf::extract(path),
        DocumentFormat::Docx => docx::extract(path),
        DocumentFormat::PlainText => match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                error!("Error reading text file {}: {e}", path.display());
                String::new()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_extension("pdf"), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_extension("PDF"), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_extension("docx"), DocumentFormat::Docx);
        assert_eq!(DocumentFormat::from_extension("txt"), DocumentFormat::PlainText);
        assert_eq!(DocumentFormat::from_extension("odt"), DocumentFormat::PlainText);
        assert_eq!(DocumentFormat::from_extension(""), DocumentFormat::PlainText);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("resume.PDF")),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("no_extension")),
            DocumentFormat::PlainText
        );
    }

    #[test]
    fn test_plain_text_read() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Education and Skills").unwrap();
        let text = extract_text(file.path(), DocumentFormat::PlainText);
        assert_eq!(text, "Education and Skills");
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let text = extract_text(Path::new("/nonexistent/resume.txt"), DocumentFormat::PlainText);
        assert_eq!(text, "");
    }

    #[test]
    fn test_invalid_pdf_degrades_to_empty() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "these bytes are not a PDF").unwrap();
        let text = extract_text(file.path(), DocumentFormat::Pdf);
        assert_eq!(text, "");
    }
}
