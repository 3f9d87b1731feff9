//! Contact form fields and validation.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::status::Form;

const MIN_NAME_CHARS: usize = 2;
const MIN_SUBJECT_CHARS: usize = 3;
const MIN_MESSAGE_CHARS: usize = 10;

/// Generic fallback when the contact endpoint declines without a message.
pub const CONTACT_FALLBACK_MESSAGE: &str = "Failed to send message. Please try again.";

/// The four contact fields, exactly as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Field selector for input handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Form field name, shared by the HTML inputs and the multipart body.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl ContactFormInput {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }
}

pub(crate) fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

pub(crate) fn looks_like_email(value: &str) -> bool {
    value.contains('@')
}

/// Check contact fields in priority order: name, email, subject, message.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate(input: &ContactFormInput) -> Result<(), ValidationError> {
    if trimmed_len(&input.name) < MIN_NAME_CHARS {
        return Err(ValidationError::NameTooShort);
    }
    if !looks_like_email(&input.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if trimmed_len(&input.subject) < MIN_SUBJECT_CHARS {
        return Err(ValidationError::SubjectTooShort);
    }
    if trimmed_len(&input.message) < MIN_MESSAGE_CHARS {
        return Err(ValidationError::MessageTooShort);
    }
    Ok(())
}

#[must_use]
pub fn success_message(name: &str) -> String {
    format!("Thank you {name}, your message has been sent successfully!")
}

impl Form for ContactFormInput {
    type Input = ContactFormInput;

    fn validate(&self) -> Result<Self::Input, ValidationError> {
        validate(self)?;
        Ok(self.clone())
    }

    // Accepted messages clear the form.
    fn accepted(&mut self, input: &Self::Input) -> String {
        *self = Self::default();
        success_message(&input.name)
    }
}
