use regex::Regex;

use crate::error::ResumeError;

/// Matches text against a fixed skill vocabulary.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    patterns: Vec<(String, Regex)>,
}

impl SkillMatcher {
    /// Compile one case-insensitive whole-word pattern per vocabulary term.
    ///
    /// Terms are matched literally. A `\b` is only asserted on a side whose
    /// edge character is a word character, so `C++` matches in both
    /// "C++ development" and "C++17".
    pub fn new(vocabulary: &[String]) -> Result<Self, ResumeError> {
        let patterns = vocabulary
            .iter()
            .map(|term| {
                let start = if term.chars().next().is_some_and(is_word_char) {
                    r"\b"
                } else {
                    ""
                };
                let end = if term.chars().next_back().is_some_and(is_word_char) {
                    r"\b"
                } else {
                    ""
                };
                let pattern = format!(r"(?i){start}{}{end}", regex::escape(term));
                Ok((term.clone(), Regex::new(&pattern)?))
            })
            .collect::<Result<Vec<_>, ResumeError>>()?;

        Ok(SkillMatcher { patterns })
    }

    /// Vocabulary terms present in the text, in vocabulary order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(term, _)| term.clone())
            .collect()
    }

    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(term, _)| term.as_str())
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
