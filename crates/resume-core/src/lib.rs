pub mod batch;
pub mod config;
pub mod entities;
pub mod error;
pub mod extraction;
pub mod fields;
pub mod model;
pub mod parser;

pub use batch::batch_parse_resumes;
pub use parser::ResumeParser;

use config::ExtractionConfig;
use entities::EntityRecognizer;
use error::ResumeError;
use extraction::TextExtractor;
use model::{BatchResult, ParsedRecord};
use std::path::Path;

/// Parse a single resume file with a one-off parser.
pub fn parse_resume(
    path: &Path,
    config: &ExtractionConfig,
    text_extractor: &dyn TextExtractor,
    recognizer: &dyn EntityRecognizer,
) -> Result<ParsedRecord, ResumeError> {
    let parser = ResumeParser::new(config, text_extractor, recognizer)?;
    Ok(parser.parse_resume(path))
}

/// Main API entry point: parse every eligible resume in a directory.
pub fn parse_directory(
    dir: &Path,
    config: &ExtractionConfig,
    text_extractor: &dyn TextExtractor,
    recognizer: &dyn EntityRecognizer,
) -> Result<BatchResult, ResumeError> {
    let parser = ResumeParser::new(config, text_extractor, recognizer)?;
    batch_parse_resumes(dir, &parser)
}
