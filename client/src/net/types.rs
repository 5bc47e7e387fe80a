//! Shared wire DTOs for the contact action.
//!
//! DESIGN
//! ======
//! The server deserializes exactly these types, so the shapes here are the
//! contract. Missing optional fields parse as `None` and `None` fields are
//! omitted when serializing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Raw values typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Name => self.name.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::Message => self.message.as_deref(),
        }
    }
}

/// Outcome of one submission attempt: field errors plus an optional
/// form-level message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormResult {
    #[serde(default)]
    pub errors: FieldErrors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactFormResult {
    /// Result carrying only a form-level message.
    #[must_use]
    pub fn with_message(message: impl Into<String>) -> Self {
        Self { errors: FieldErrors::default(), message: Some(message.into()) }
    }

    /// No field errors and no message: the submission was accepted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.message.is_none()
    }
}

/// Body of `POST /api/contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<ContactFormResult>,
    pub form: ContactSubmission,
}

/// The three contact form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// Value of the control's `name` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}
