//! Contact action: validate a submission, deliver it, and describe the
//! outcome as a `ContactFormResult`.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error to the route. Validation failures become
//! field errors plus a form-level message; delivery failures become a
//! form-level message only.

use contact_client::net::types::{ContactFormResult, ContactSubmission, FieldErrors};

use super::inbox::{ContactInbox, ContactMessage};

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

pub const REQUIRED: &str = "Required";
pub const NAME_TOO_LONG: &str = "Name is too long";
pub const INVALID_EMAIL: &str = "Enter a valid email address";
pub const MESSAGE_TOO_LONG: &str = "Message is too long";
pub const FIX_ERRORS: &str = "Fix errors below";
pub const DELIVERY_FAILED: &str = "Your message could not be sent. Please try again.";

const MAX_NAME_CHARS: usize = 100;
const MAX_MESSAGE_CHARS: usize = 5000;

/// Submission that passed validation, with normalized values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Check every field, collecting all failures at once.
///
/// # Errors
///
/// Returns the per-field messages if any field is invalid.
pub fn validate(form: &ContactSubmission) -> Result<ValidContact, FieldErrors> {
    let name = validate_name(&form.name);
    let email = validate_email(&form.email);
    let message = validate_message(&form.message);

    match (name, email, message) {
        (Ok(name), Ok(email), Ok(message)) => Ok(ValidContact { name, email, message }),
        (name, email, message) => Err(FieldErrors {
            name: name.err().map(str::to_owned),
            email: email.err().map(str::to_owned),
            message: message.err().map(str::to_owned),
        }),
    }
}

fn validate_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(REQUIRED);
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(NAME_TOO_LONG);
    }
    Ok(name.to_owned())
}

fn validate_email(raw: &str) -> Result<String, &'static str> {
    if raw.trim().is_empty() {
        return Err(REQUIRED);
    }
    normalize_email(raw).ok_or(INVALID_EMAIL)
}

fn validate_message(raw: &str) -> Result<String, &'static str> {
    let message = raw.trim();
    if message.is_empty() {
        return Err(REQUIRED);
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(MESSAGE_TOO_LONG);
    }
    Ok(message.to_owned())
}

/// Lowercase `local@domain`, or `None` if the address is malformed.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || normalized.chars().any(char::is_whitespace) {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Run one submission attempt end to end.
///
/// `previous` is the result the form showed before this attempt; it only
/// marks the attempt as a resubmission in the logs.
pub async fn submit(
    inbox: &dyn ContactInbox,
    previous: Option<&ContactFormResult>,
    form: ContactSubmission,
) -> ContactFormResult {
    let resubmission = previous.is_some();

    let contact = match validate(&form) {
        Ok(contact) => contact,
        Err(errors) => {
            tracing::debug!(
                resubmission,
                name_invalid = errors.name.is_some(),
                email_invalid = errors.email.is_some(),
                message_invalid = errors.message.is_some(),
                "contact submission rejected"
            );
            return ContactFormResult { errors, message: Some(FIX_ERRORS.to_owned()) };
        }
    };

    let message = ContactMessage::new(contact.name, contact.email, contact.message);
    let id = message.id;
    match inbox.deliver(message).await {
        Ok(()) => {
            tracing::info!(%id, resubmission, "contact message accepted");
            ContactFormResult::default()
        }
        Err(e) => {
            tracing::warn!(%id, error = %e, "contact message delivery failed");
            ContactFormResult::with_message(DELIVERY_FAILED)
        }
    }
}
