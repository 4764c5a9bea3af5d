pub mod contact;
pub mod sections;
pub mod skills;

use tracing::debug;

use crate::config::ExtractionConfig;
use crate::entities::{extract_entities, EntityRecognizer};
use crate::error::ResumeError;
use crate::model::ResumeFields;
use contact::ContactExtractor;
use sections::extract_section_lines;
use skills::SkillMatcher;

/// The five field extractors, built once from a config and reused across files.
#[derive(Debug, Clone)]
pub struct FieldExtractors {
    contact: ContactExtractor,
    skills: SkillMatcher,
    education_keywords: Vec<String>,
    work_keywords: Vec<String>,
}

impl FieldExtractors {
    pub fn new(config: &ExtractionConfig) -> Result<Self, ResumeError> {
        Ok(FieldExtractors {
            contact: ContactExtractor::new()?,
            skills: SkillMatcher::new(&config.skills)?,
            education_keywords: config.education_keywords.clone(),
            work_keywords: config.work_keywords.clone(),
        })
    }

    /// Run every extractor over `text`.
    ///
    /// Stops at the first failing extractor; fields already computed are dropped.
    pub fn extract(
        &self,
        text: &str,
        recognizer: &dyn EntityRecognizer,
    ) -> Result<ResumeFields, ResumeError> {
        let contact = self.contact.extract(text);
        debug!(
            email = contact.email.is_some(),
            phone = contact.phone.is_some(),
            "contact details"
        );

        let entities = extract_entities(text, recognizer)?;
        debug!(
            recognizer = recognizer.backend_name(),
            name = entities.name.is_some(),
            organizations = entities.organizations.len(),
            "entities"
        );

        let skills = self.skills.extract(text);
        let education = extract_section_lines(text, &self.education_keywords);
        let work_experience = extract_section_lines(text, &self.work_keywords);
        debug!(
            skills = skills.len(),
            education = education.len(),
            work_experience = work_experience.len(),
            "skills and sections"
        );

        Ok(ResumeFields {
            name: entities.name,
            email: contact.email,
            phone: contact.phone,
            organizations: entities.organizations,
            skills,
            education,
            work_experience,
        })
    }
}
