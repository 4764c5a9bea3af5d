pub mod docx;
pub mod pdftotext;

use crate::error::ResumeError;
use crate::model::{DocumentFormat, SourceDocument};
use tracing::debug;

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text from PDF bytes, returning one string per page in document order.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<String>, ResumeError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Turns a classified source document into one plain-text blob.
pub trait TextExtractor: Send + Sync {
    /// Decode failures come back as `ResumeError::Decode` carrying the path and cause.
    fn extract_text(&self, document: &SourceDocument) -> Result<String, ResumeError>;
}

/// Default text extractor: PDF through a pluggable backend, DOCX read in-process.
pub struct DocumentTextExtractor<P: PdfExtractor> {
    pdf: P,
}

impl<P: PdfExtractor> DocumentTextExtractor<P> {
    pub fn new(pdf: P) -> Self {
        DocumentTextExtractor { pdf }
    }

    fn read_pdf(&self, document: &SourceDocument) -> Result<String, ResumeError> {
        let bytes = std::fs::read(document.path())?;
        let pages = self.pdf.extract_pages(&bytes)?;
        debug!(
            path = %document.path().display(),
            backend = self.pdf.backend_name(),
            pages = pages.len(),
            "extracted PDF pages"
        );
        // Pages run together with no separator.
        Ok(pages.concat())
    }

    fn read_docx(&self, document: &SourceDocument) -> Result<String, ResumeError> {
        let bytes = std::fs::read(document.path())?;
        let paragraphs = docx::extract_paragraphs(&bytes)?;
        debug!(
            path = %document.path().display(),
            paragraphs = paragraphs.len(),
            "extracted DOCX paragraphs"
        );
        Ok(paragraphs.join("\n"))
    }
}

impl<P: PdfExtractor> TextExtractor for DocumentTextExtractor<P> {
    fn extract_text(&self, document: &SourceDocument) -> Result<String, ResumeError> {
        match document.format() {
            DocumentFormat::Pdf => self.read_pdf(document).map_err(|e| {
                ResumeError::Decode(format!(
                    "Failed to read PDF file: {}. Error: {}",
                    document.path().display(),
                    e
                ))
            }),
            DocumentFormat::Docx => self.read_docx(document).map_err(|e| {
                ResumeError::Decode(format!(
                    "Failed to read DOCX file: {}. Error: {}",
                    document.path().display(),
                    e
                ))
            }),
            DocumentFormat::Unsupported(ext) => Err(ResumeError::UnsupportedFormat(ext.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    struct FixedPages(Vec<&'static str>);

    impl PdfExtractor for FixedPages {
        fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<String>, ResumeError> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }

        fn backend_name(&self) -> &str {
            "fixed"
        }
    }

    struct Broken;

    impl PdfExtractor for Broken {
        fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<String>, ResumeError> {
            Err(ResumeError::PdftotextFailed {
                code: 1,
                stderr: "Syntax Error: Couldn't find trailer dictionary".into(),
            })
        }

        fn backend_name(&self) -> &str {
            "broken"
        }
    }

    fn temp_file(suffix: &str, contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn test_pdf_pages_join_without_separator() {
        let file = temp_file(".pdf", b"%PDF-1.4");
        let extractor = DocumentTextExtractor::new(FixedPages(vec!["Jane Doe", "Python"]));
        let text = extractor
            .extract_text(&SourceDocument::classify(file.path()))
            .unwrap();
        assert_eq!(text, "Jane DoePython");
    }

    #[test]
    fn test_pdf_backend_error_is_wrapped_with_path() {
        let file = temp_file(".pdf", b"garbage");
        let extractor = DocumentTextExtractor::new(Broken);
        let err = extractor
            .extract_text(&SourceDocument::classify(file.path()))
            .unwrap_err();

        let msg = err.to_string();
        assert!(matches!(err, ResumeError::Decode(_)));
        assert!(msg.starts_with("Failed to read PDF file: "));
        assert!(msg.contains(&file.path().display().to_string()));
        assert!(msg.contains("trailer dictionary"));
    }

    #[test]
    fn test_corrupt_docx_is_decode_error() {
        let file = temp_file(".docx", b"not a zip archive");
        let extractor = DocumentTextExtractor::new(Broken);
        let err = extractor
            .extract_text(&SourceDocument::classify(file.path()))
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to read DOCX file: "));
    }

    #[test]
    fn test_unsupported_format() {
        let extractor = DocumentTextExtractor::new(Broken);
        let err = extractor
            .extract_text(&SourceDocument::classify("notes.txt"))
            .unwrap_err();
        assert!(matches!(err, ResumeError::UnsupportedFormat(ref ext) if ext == ".txt"));
    }
}
