use regex::Regex;

use crate::error::ResumeError;
use crate::model::ContactInfo;

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+";

/// Optional country code (group 1) followed by a 3/3/4 number (group 2).
const PHONE_PATTERN: &str = r"(\+?\d{1,3}[-.\s]?)?(\d{3}[-.\s]?\d{3}[-.\s]?\d{4})";

/// Regex-based email and phone finder.
#[derive(Debug, Clone)]
pub struct ContactExtractor {
    email: Regex,
    phone: Regex,
}

impl ContactExtractor {
    pub fn new() -> Result<Self, ResumeError> {
        Ok(ContactExtractor {
            email: Regex::new(EMAIL_PATTERN)?,
            phone: Regex::new(PHONE_PATTERN)?,
        })
    }

    /// First email and first phone number in the text, scanning left to right.
    ///
    /// Only the ten-digit part of the phone number is returned; a leading
    /// country code is matched but not included.
    pub fn extract(&self, text: &str) -> ContactInfo {
        let email = self.email.find(text).map(|m| m.as_str().to_string());
        let phone = self
            .phone
            .captures(text)
            .and_then(|caps| caps.get(2))
            .map(|m| m.as_str().to_string());

        ContactInfo { email, phone }
    }
}
