//! Contact-form validation. Nothing is sent anywhere; accepted submissions
//! are handed back to the caller to log.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Missing required fields")]
    MissingFields,
}

/// Raw form payload as posted by the site.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn required(field: Option<String>) -> Result<String, ContactError> {
    match field {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ContactError::MissingFields),
    }
}

impl ContactForm {
    pub fn validate(self) -> Result<ContactSubmission, ContactError> {
        Ok(ContactSubmission {
            name: required(self.name)?,
            email: required(self.email)?,
            message: required(self.message)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_form_accepted() {
        let form: ContactForm = serde_json::from_str(
            r#"{"name": "Sam", "email": "sam@example.com", "message": "Let's talk"}"#,
        )
        .unwrap();
        let submission = form.validate().unwrap();
        assert_eq!(submission.name, "Sam");
        assert_eq!(submission.message, "Let's talk");
    }

    #[test]
    fn test_missing_field_rejected() {
        let form: ContactForm =
            serde_json::from_str(r#"{"name": "Sam", "email": "sam@example.com"}"#).unwrap();
        assert_eq!(form.validate(), Err(ContactError::MissingFields));
    }

    #[test]
    fn test_blank_field_rejected() {
        let form = ContactForm {
            name: Some("Sam".into()),
            email: Some("  ".into()),
            message: Some("hi".into()),
        };
        assert_eq!(form.validate(), Err(ContactError::MissingFields));
    }

    #[test]
    fn test_error_message_matches_wire_text() {
        assert_eq!(ContactError::MissingFields.to_string(), "Missing required fields");
    }
}
