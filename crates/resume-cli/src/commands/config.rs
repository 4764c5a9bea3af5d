use resume_core::config::{load_config, ExtractionConfig};
use resume_core::error::ResumeError;
use std::path::Path;

use crate::output;

pub fn show() -> Result<(), ResumeError> {
    output::json::print(&ExtractionConfig::default())
}

pub fn validate(file: &Path) -> Result<(), ResumeError> {
    let config = load_config(file)?;
    println!("Config is valid.");
    println!("  Skills: {}", config.skills.join(", "));
    println!(
        "  Education keywords: {}",
        config.education_keywords.join(", ")
    );
    println!("  Work keywords: {}", config.work_keywords.join(", "));
    Ok(())
}
