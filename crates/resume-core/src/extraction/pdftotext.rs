use crate::error::ResumeError;
use crate::extraction::PdfExtractor;
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Runs in reading-order mode (no `-layout`); resumes are scanned line by line,
/// not as tables.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<String>, ResumeError> {
        // Write PDF bytes to a temp file
        let mut tmpfile = tempfile::NamedTempFile::new()?;
        tmpfile.write_all(pdf_bytes)?;
        let tmp_path = tmpfile.path().to_path_buf();

        let output = Command::new("pdftotext")
            .arg("-enc")
            .arg("UTF-8")
            .arg(&tmp_path)
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ResumeError::PdftotextNotFound
                } else {
                    ResumeError::Io(e)
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ResumeError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(split_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Split pdftotext output into per-page text.
///
/// pdftotext terminates every page with a form feed (\x0c) and every line with
/// a newline. The final newline of each page is dropped so that pages carry no
/// trailing separator of their own.
fn split_pages(text: &str) -> Vec<String> {
    let mut pages: Vec<&str> = text.split('\x0c').collect();
    if pages.len() > 1 && pages.last().is_some_and(|p| p.is_empty()) {
        pages.pop();
    }

    pages
        .into_iter()
        .map(|page| page.strip_suffix('\n').unwrap_or(page).to_string())
        .collect()
}
