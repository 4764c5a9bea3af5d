pub mod batch;
pub mod config;
pub mod parse;

use resume_core::config::{load_config, ExtractionConfig};
use resume_core::entities::command::CommandRecognizer;
use resume_core::entities::{EntityRecognizer, NoopRecognizer};
use resume_core::error::ResumeError;
use resume_core::extraction::pdftotext::PdftotextExtractor;
use resume_core::extraction::DocumentTextExtractor;
use tracing::{debug, warn};

use crate::PipelineArgs;

/// Everything a command needs to run the extraction pipeline.
pub struct Pipeline {
    pub config: ExtractionConfig,
    pub text_extractor: DocumentTextExtractor<PdftotextExtractor>,
    pub recognizer: Box<dyn EntityRecognizer>,
}

impl Pipeline {
    pub fn from_args(args: &PipelineArgs) -> Result<Self, ResumeError> {
        let config = match &args.config {
            Some(path) => load_config(path)?,
            None => ExtractionConfig::default(),
        };

        if !PdftotextExtractor::is_available() {
            warn!("pdftotext not found on PATH; PDF files will fail to parse");
        }

        let recognizer: Box<dyn EntityRecognizer> = match &args.ner_command {
            Some(program) => Box::new(CommandRecognizer::new(program, args.ner_args.clone())),
            None => {
                debug!("no entity recognizer configured; name and organizations stay empty");
                Box::new(NoopRecognizer)
            }
        };

        Ok(Pipeline {
            config,
            text_extractor: DocumentTextExtractor::new(PdftotextExtractor::new()),
            recognizer,
        })
    }
}
