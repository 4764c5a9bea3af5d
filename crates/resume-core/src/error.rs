use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ResumeError {
    #[error("Unsupported file type: {0}. Only PDF and DOCX files are supported.")]
    UnsupportedFormat(String),

    /// Format-specific read failure, already formatted with the file path and cause.
    #[error("{0}")]
    Decode(String),

    #[error("{0}")]
    Extraction(String),

    #[error("Directory '{}' does not exist.", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("invalid DOCX container: {0}")]
    Docx(String),

    #[error("entity recognizer '{0}' not found")]
    RecognizerNotFound(String),

    #[error("entity recognizer failed with exit code {code}: {stderr}")]
    RecognizerFailed { code: i32, stderr: String },

    #[error("failed to load config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}
