pub mod builtin;
pub mod schema;

use crate::error::ResumeError;
pub use schema::ExtractionConfig;
use std::path::Path;

/// Load an extraction config from a JSON file.
pub fn load_config(path: &Path) -> Result<ExtractionConfig, ResumeError> {
    let content = std::fs::read_to_string(path).map_err(|e| ResumeError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let config: ExtractionConfig =
        serde_json::from_str(&content).map_err(|e| ResumeError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_config(&config)?;
    Ok(config)
}

/// Parse an extraction config from a JSON string (no file path context).
pub fn parse_config_str(json: &str) -> Result<ExtractionConfig, ResumeError> {
    let config: ExtractionConfig = serde_json::from_str(json)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate that a config is usable by the extractors.
pub fn validate_config(config: &ExtractionConfig) -> Result<(), ResumeError> {
    if config.skills.is_empty() {
        return Err(ResumeError::ConfigInvalid("skills must not be empty".into()));
    }
    if let Some(blank) = config.skills.iter().position(|s| s.trim().is_empty()) {
        return Err(ResumeError::ConfigInvalid(format!(
            "skill at index {blank} is blank"
        )));
    }

    validate_keywords("education_keywords", &config.education_keywords)?;
    validate_keywords("work_keywords", &config.work_keywords)?;

    Ok(())
}

fn validate_keywords(field: &str, keywords: &[String]) -> Result<(), ResumeError> {
    if keywords.is_empty() {
        return Err(ResumeError::ConfigInvalid(format!(
            "{field} must not be empty"
        )));
    }

    for keyword in keywords {
        if keyword.trim().is_empty() {
            return Err(ResumeError::ConfigInvalid(format!(
                "{field} contains a blank keyword"
            )));
        }
        // Lines are lowercased before matching, so uppercase keywords never hit.
        if keyword.chars().any(char::is_uppercase) {
            return Err(ResumeError::ConfigInvalid(format!(
                "{field} keyword '{keyword}' must be lowercase"
            )));
        }
    }

    Ok(())
}
