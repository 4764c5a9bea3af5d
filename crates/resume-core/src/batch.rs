use std::path::Path;

use tracing::{debug, info};

use crate::error::ResumeError;
use crate::model::BatchResult;
use crate::parser::ResumeParser;

const ELIGIBLE_SUFFIXES: [&str; 2] = [".pdf", ".docx"];

/// Parse every `.pdf` and `.docx` file directly inside `dir`.
///
/// Files are processed one at a time in directory listing order. The suffix
/// check is case-sensitive and subdirectories are not descended into. A
/// per-file failure is recorded in the result; only a missing directory (or a
/// failure to list it) aborts the batch.
pub fn batch_parse_resumes(
    dir: &Path,
    parser: &ResumeParser<'_>,
) -> Result<BatchResult, ResumeError> {
    if !dir.exists() {
        return Err(ResumeError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut results = BatchResult::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            debug!(name = ?file_name, "skipping non UTF-8 file name");
            continue;
        };

        if !ELIGIBLE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            debug!(name, "skipping ineligible file");
            continue;
        }
        if entry.file_type()?.is_dir() {
            debug!(name, "skipping directory");
            continue;
        }

        let record = parser.parse_resume(&entry.path());
        results.push(name, record);
    }

    info!(
        dir = %dir.display(),
        files = results.len(),
        succeeded = results.success_count(),
        failed = results.failure_count(),
        "batch complete"
    );

    Ok(results)
}
