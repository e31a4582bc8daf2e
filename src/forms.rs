//! Form Validation
//!
//! Required-field checks for the account, feedback, and contact forms.
//! These mirror what a browser enforces on the web forms so the CLI
//! behaves the same way.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;

use crate::model::{Credentials, Registration};

/// Validation failures, worded for display
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Please fill out all fields!")]
    MissingFields,

    #[error("Please fill out all fields and provide a rating!")]
    MissingFeedback,

    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Email and password are required")]
    MissingCredentials,
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"))
}

/// Loose `user@host.tld` check, as a browser email input would do
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email.trim())
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl Credentials {
    pub fn validate(self) -> Result<Self, FormError> {
        if blank(&self.email) || blank(&self.password) {
            return Err(FormError::MissingCredentials);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(Self {
            email: self.email.trim().to_string(),
            password: self.password,
        })
    }
}

impl Registration {
    pub fn validate(self) -> Result<Self, FormError> {
        if blank(&self.email) || blank(&self.password) {
            return Err(FormError::MissingCredentials);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(Self {
            email: self.email.trim().to_string(),
            ..self
        })
    }
}

/// Feedback page input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Star rating, 0 when not chosen
    pub rating: u8,
}

/// Body of `feedback/add_feedback/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    pub rating: u8,
}

impl FeedbackForm {
    pub fn validate(&self) -> Result<FeedbackPayload, FormError> {
        if blank(&self.name) || blank(&self.email) || blank(&self.message) || self.rating == 0 {
            return Err(FormError::MissingFeedback);
        }
        if self.rating > 5 {
            return Err(FormError::RatingOutOfRange);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(FeedbackPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
            rating: self.rating,
        })
    }
}

/// Contact page input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Body of the contact endpoint. The subject travels inside the message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactPayload {
    pub full_name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactPayload, FormError> {
        if [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .any(|v| blank(v))
        {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(ContactPayload {
            full_name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: format!("{}\n\n{}", self.subject.trim(), self.message.trim()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_check() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("  ana@example.co.uk "));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana example@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_credentials_trim_email() {
        let creds = Credentials {
            email: " ana@example.com ".to_string(),
            password: "secret".to_string(),
        }
        .validate()
        .unwrap();
        assert_eq!(creds.email, "ana@example.com");

        let err = Credentials {
            email: "ana@example.com".to_string(),
            password: " ".to_string(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, FormError::MissingCredentials);
    }

    #[test]
    fn test_feedback_requires_rating() {
        let mut form = FeedbackForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            message: "Great app".to_string(),
            rating: 0,
        };
        assert_eq!(form.validate(), Err(FormError::MissingFeedback));
        assert_eq!(
            FormError::MissingFeedback.to_string(),
            "Please fill out all fields and provide a rating!"
        );

        form.rating = 6;
        assert_eq!(form.validate(), Err(FormError::RatingOutOfRange));

        form.rating = 4;
        let payload = form.validate().unwrap();
        assert_eq!(payload.rating, 4);
    }

    #[test]
    fn test_contact_folds_subject_into_message() {
        let form = ContactForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Question about my results".to_string(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.full_name, "Ana");
        assert_eq!(payload.message, "Hello\n\nQuestion about my results");

        let empty = ContactForm::default();
        assert_eq!(empty.validate(), Err(FormError::MissingFields));
    }
}
