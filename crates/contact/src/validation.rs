use std::sync::LazyLock;

use regex::Regex;

use crate::{FormSubmission, ValidationError};

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

// Norwegian national number, optional country code.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+47)?[0-9]{8}$").expect("valid phone regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    let phone: String = phone.chars().filter(|c| !c.is_whitespace()).collect();

    PHONE_REGEX.is_match(&phone)
}

impl FormSubmission {
    /// Checks the submission rules in order and reports the first one that fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            &self.name,
            &self.email,
            &self.phone,
            &self.service_type,
            &self.description,
        ];

        if required.iter().any(|value| value.is_empty()) {
            return Err(ValidationError::MissingRequiredFields);
        }

        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        if !is_valid_phone(&self.phone) {
            return Err(ValidationError::InvalidPhone);
        }

        Ok(())
    }
}
