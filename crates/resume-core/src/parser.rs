use std::path::Path;

use tracing::{info, warn};

use crate::config::ExtractionConfig;
use crate::entities::EntityRecognizer;
use crate::error::ResumeError;
use crate::extraction::TextExtractor;
use crate::fields::FieldExtractors;
use crate::model::{DocumentFormat, ParsedRecord, SourceDocument};

/// Parses one resume file at a time into a [`ParsedRecord`].
///
/// The text extractor and entity recognizer are borrowed from the caller,
/// which owns their lifecycle.
pub struct ResumeParser<'a> {
    text_extractor: &'a dyn TextExtractor,
    recognizer: &'a dyn EntityRecognizer,
    fields: FieldExtractors,
}

impl<'a> ResumeParser<'a> {
    pub fn new(
        config: &ExtractionConfig,
        text_extractor: &'a dyn TextExtractor,
        recognizer: &'a dyn EntityRecognizer,
    ) -> Result<Self, ResumeError> {
        Ok(ResumeParser {
            text_extractor,
            recognizer,
            fields: FieldExtractors::new(config)?,
        })
    }

    /// Parse a single file. Never fails: every problem becomes a failure record.
    pub fn parse_resume(&self, path: &Path) -> ParsedRecord {
        let document = SourceDocument::classify(path);

        if let DocumentFormat::Unsupported(ext) = document.format() {
            let err = ResumeError::UnsupportedFormat(ext.clone());
            warn!(path = %path.display(), "{err}");
            return ParsedRecord::failure(err.to_string());
        }

        let text = match self.text_extractor.extract_text(&document) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), "{e}");
                return ParsedRecord::failure(e.to_string());
            }
        };

        match self.fields.extract(&text, self.recognizer) {
            Ok(fields) => {
                info!(
                    path = %path.display(),
                    format = %document.format(),
                    skills = fields.skills.len(),
                    "parsed resume"
                );
                ParsedRecord::Success(fields)
            }
            Err(e) => {
                let message = format!("Failed to parse resume content: {e}");
                warn!(path = %path.display(), "{message}");
                ParsedRecord::failure(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{EntitySpan, NoopRecognizer};

    struct FixedText(&'static str);

    impl TextExtractor for FixedText {
        fn extract_text(&self, _document: &SourceDocument) -> Result<String, ResumeError> {
            Ok(self.0.to_string())
        }
    }

    struct Unreadable;

    impl TextExtractor for Unreadable {
        fn extract_text(&self, document: &SourceDocument) -> Result<String, ResumeError> {
            Err(ResumeError::Decode(format!(
                "Failed to read PDF file: {}. Error: EOF marker not found",
                document.path().display()
            )))
        }
    }

    struct Crashing;

    impl EntityRecognizer for Crashing {
        fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, ResumeError> {
            Err(ResumeError::RecognizerFailed {
                code: 1,
                stderr: "out of memory".into(),
            })
        }

        fn backend_name(&self) -> &str {
            "crashing"
        }
    }

    #[test]
    fn test_unsupported_extension() {
        let config = ExtractionConfig::default();
        let parser = ResumeParser::new(&config, &FixedText(""), &NoopRecognizer).unwrap();

        let record = parser.parse_resume(Path::new("resume.txt"));
        assert_eq!(
            record.error(),
            Some("Unsupported file type: .txt. Only PDF and DOCX files are supported.")
        );
    }

    #[test]
    fn test_extension_check_ignores_case() {
        let config = ExtractionConfig::default();
        let parser =
            ResumeParser::new(&config, &FixedText("SQL"), &NoopRecognizer).unwrap();

        let record = parser.parse_resume(Path::new("RESUME.PDF"));
        assert_eq!(record.fields().unwrap().skills, vec!["SQL"]);
    }

    #[test]
    fn test_decode_failure_is_wrapped_verbatim() {
        let config = ExtractionConfig::default();
        let parser = ResumeParser::new(&config, &Unreadable, &NoopRecognizer).unwrap();

        let record = parser.parse_resume(Path::new("/cv/broken.pdf"));
        assert_eq!(
            record.error(),
            Some("Failed to read PDF file: /cv/broken.pdf. Error: EOF marker not found")
        );
    }

    #[test]
    fn test_field_failure_discards_partial_results() {
        let config = ExtractionConfig::default();
        let parser = ResumeParser::new(
            &config,
            &FixedText("jane@example.com\nPython"),
            &Crashing,
        )
        .unwrap();

        let record = parser.parse_resume(Path::new("cv.docx"));
        assert!(!record.is_success());
        assert_eq!(
            record.error(),
            Some(
                "Failed to parse resume content: entity recognizer failed with exit code 1: out of memory"
            )
        );
    }
}
