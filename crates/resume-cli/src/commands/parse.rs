use resume_core::error::ResumeError;
use std::path::PathBuf;

use super::Pipeline;
use crate::output;
use crate::PipelineArgs;

pub fn run(input_file: PathBuf, args: &PipelineArgs, output_format: &str) -> Result<(), ResumeError> {
    let pipeline = Pipeline::from_args(args)?;
    let record = resume_core::parse_resume(
        &input_file,
        &pipeline.config,
        &pipeline.text_extractor,
        pipeline.recognizer.as_ref(),
    )?;

    match output_format {
        "json" => output::json::print(&record)?,
        _ => println!("{}", output::table::format_record(&record)),
    }

    Ok(())
}
