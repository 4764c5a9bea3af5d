pub mod command;

use crate::error::ResumeError;
use crate::model::EntityFindings;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label attached to a recognized span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityLabel {
    Person,
    Org,
    Other(String),
}

impl From<String> for EntityLabel {
    fn from(label: String) -> Self {
        match label.as_str() {
            "PERSON" => EntityLabel::Person,
            "ORG" => EntityLabel::Org,
            _ => EntityLabel::Other(label),
        }
    }
}

impl From<EntityLabel> for String {
    fn from(label: EntityLabel) -> Self {
        label.to_string()
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityLabel::Person => write!(f, "PERSON"),
            EntityLabel::Org => write!(f, "ORG"),
            EntityLabel::Other(label) => write!(f, "{label}"),
        }
    }
}

/// A contiguous piece of text the recognizer tagged with a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: EntityLabel,
}

impl EntitySpan {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        EntitySpan {
            text: text.into(),
            label,
        }
    }
}

/// Named-entity recognition backend.
pub trait EntityRecognizer: Send + Sync {
    /// Return labeled spans in order of appearance.
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, ResumeError>;

    /// Name of this recognizer (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Recognizer that never finds anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRecognizer;

impl EntityRecognizer for NoopRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, ResumeError> {
        Ok(Vec::new())
    }

    fn backend_name(&self) -> &str {
        "none"
    }
}

/// Split recognizer output into the candidate name and organizations.
///
/// The first PERSON span is the name; every ORG span is kept, duplicates included.
pub fn extract_entities(
    text: &str,
    recognizer: &dyn EntityRecognizer,
) -> Result<EntityFindings, ResumeError> {
    let spans = recognizer.recognize(text)?;
    Ok(collect_findings(spans))
}

fn collect_findings(spans: Vec<EntitySpan>) -> EntityFindings {
    let mut findings = EntityFindings::default();

    for span in spans {
        match span.label {
            EntityLabel::Person => {
                if findings.name.is_none() {
                    findings.name = Some(span.text);
                }
            }
            EntityLabel::Org => findings.organizations.push(span.text),
            EntityLabel::Other(_) => {}
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<EntitySpan>);

    impl EntityRecognizer for Fixed {
        fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, ResumeError> {
            Ok(self.0.clone())
        }

        fn backend_name(&self) -> &str {
            "fixed"
        }
    }

    fn span(text: &str, label: &str) -> EntitySpan {
        EntitySpan::new(text, EntityLabel::from(label.to_string()))
    }

    #[test]
    fn test_first_person_wins_and_orgs_keep_duplicates() {
        let recognizer = Fixed(vec![
            span("Acme Corp", "ORG"),
            span("Jane Doe", "PERSON"),
            span("Berlin", "GPE"),
            span("John Roe", "PERSON"),
            span("Acme Corp", "ORG"),
            span("Globex", "ORG"),
        ]);

        let findings = extract_entities("ignored", &recognizer).unwrap();
        assert_eq!(findings.name.as_deref(), Some("Jane Doe"));
        assert_eq!(
            findings.organizations,
            vec!["Acme Corp", "Acme Corp", "Globex"]
        );
    }

    #[test]
    fn test_no_person_means_no_name() {
        let recognizer = Fixed(vec![span("MIT", "ORG")]);
        let findings = extract_entities("ignored", &recognizer).unwrap();
        assert_eq!(findings.name, None);
        assert_eq!(findings.organizations, vec!["MIT"]);
    }

    #[test]
    fn test_noop_recognizer() {
        let findings = extract_entities("Jane Doe at Acme", &NoopRecognizer).unwrap();
        assert_eq!(findings, EntityFindings::default());
    }

    #[test]
    fn test_label_round_trips_through_json() {
        let parsed: EntitySpan =
            serde_json::from_str(r#"{"text":"2019","label":"DATE"}"#).unwrap();
        assert_eq!(parsed.label, EntityLabel::Other("DATE".into()));
        assert_eq!(
            serde_json::to_string(&span("Globex", "ORG")).unwrap(),
            r#"{"text":"Globex","label":"ORG"}"#
        );
    }
}
