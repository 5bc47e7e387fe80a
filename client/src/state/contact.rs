//! Contact form submission state.
//!
//! DESIGN
//! ======
//! The form holds at most one result at a time. Each attempt replaces it
//! wholesale; nothing from an older result is merged into a newer one.
//! `pending` is the single in-flight guard: while it is set, a new attempt
//! is refused before it reaches the action.
//!
//! A page rendered in answer to a plain form post starts from a
//! `ContactFormSeed` instead of the empty default.

use serde::{Deserialize, Serialize};

use crate::net::types::{ContactField, ContactFormResult, ContactSubmission};

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Permission to run one attempt, carrying the result to pass through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    pub previous: Option<ContactFormResult>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    /// Latest action result; `None` until the first attempt resolves.
    pub result: Option<ContactFormResult>,
    /// A submission is in flight.
    pub pending: bool,
}

/// Initial form contents and result, provided through context by the server
/// when it renders the outcome of a form-encoded submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormSeed {
    pub submission: ContactSubmission,
    pub result: Option<ContactFormResult>,
}

impl ContactFormState {
    #[must_use]
    pub fn from_seed(seed: &ContactFormSeed) -> Self {
        Self { result: seed.result.clone(), pending: false }
    }

    /// Start an attempt, or `None` if another attempt is still in flight.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.pending {
            return None;
        }
        self.pending = true;
        Some(SubmitTicket { previous: self.result.clone() })
    }

    /// Record the action's result and clear the in-flight flag.
    pub fn finish_submit(&mut self, result: ContactFormResult) {
        self.result = Some(result);
        self.pending = false;
    }

    #[must_use]
    pub fn field_error(&self, field: ContactField) -> Option<&str> {
        self.result.as_ref().and_then(|r| r.errors.get(field))
    }

    /// Form-level message for the live region, if any.
    #[must_use]
    pub fn banner_message(&self) -> Option<&str> {
        self.result.as_ref().and_then(|r| r.message.as_deref())
    }

    /// Value for the submit button's `aria-disabled` attribute.
    #[must_use]
    pub fn aria_disabled(&self) -> &'static str {
        if self.pending { "true" } else { "false" }
    }
}
