use resume_core::error::ResumeError;
use resume_core::{batch_parse_resumes, ResumeParser};
use std::path::PathBuf;

use super::Pipeline;
use crate::output;
use crate::PipelineArgs;

pub fn run(
    dir: PathBuf,
    args: &PipelineArgs,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), ResumeError> {
    let pipeline = Pipeline::from_args(args)?;
    let parser = ResumeParser::new(
        &pipeline.config,
        &pipeline.text_extractor,
        pipeline.recognizer.as_ref(),
    )?;

    let result = batch_parse_resumes(&dir, &parser)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&result)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} file(s) ({} ok, {} failed), written to {}",
                result.len(),
                result.success_count(),
                result.failure_count(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&result)?,
            _ => print!("{}", output::table::format_batch(&result)),
        },
    }

    Ok(())
}
