//! HTTP bridge to the server-side contact action.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): the form only submits from the browser, so the stub
//! answers with the transport-failure result.
//!
//! ERROR HANDLING
//! ==============
//! The action contract is "always returns a result". Transport and decode
//! failures are folded into a result carrying only a form-level message,
//! so callers never see an error type.

#![allow(clippy::unused_async)]

use super::types::{ContactFormResult, ContactSubmission};

/// Form-level message shown when the action could not be reached.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Submit the form to `POST /api/contact`, passing the previous result
/// through, and return the new result.
pub async fn submit_contact(previous: Option<ContactFormResult>, form: ContactSubmission) -> ContactFormResult {
    #[cfg(feature = "hydrate")]
    {
        let request = super::types::ContactRequest { previous, form };
        match post_contact(&request).await {
            Ok(result) => result,
            Err(e) => {
                log::warn!("contact submission failed: {e}");
                ContactFormResult::with_message(TRANSPORT_FAILURE_MESSAGE)
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (previous, form);
        ContactFormResult::with_message(TRANSPORT_FAILURE_MESSAGE)
    }
}

#[cfg(feature = "hydrate")]
async fn post_contact(request: &super::types::ContactRequest) -> Result<ContactFormResult, String> {
    let resp = gloo_net::http::Request::post("/api/contact")
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("contact request failed: {}", resp.status()));
    }
    resp.json::<ContactFormResult>().await.map_err(|e| e.to_string())
}
