use serde::{Deserialize, Serialize};

use super::builtin;

/// Vocabulary and keyword sets driving the field extractors.
///
/// Fields missing from a config file fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Skill terms, matched case-insensitively as whole words. Output follows this order.
    pub skills: Vec<String>,
    /// Lowercase substrings marking a line as education history.
    pub education_keywords: Vec<String>,
    /// Lowercase substrings marking a line as work history.
    pub work_keywords: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        ExtractionConfig {
            skills: to_owned(builtin::SKILLS),
            education_keywords: to_owned(builtin::EDUCATION_KEYWORDS),
            work_keywords: to_owned(builtin::WORK_KEYWORDS),
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
