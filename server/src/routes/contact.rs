//! Contact action routes.
//!
//! `POST /api/contact` is the JSON action the hydrated form calls.
//! `POST /contact` takes the same fields form-encoded and answers with the
//! contact page rendered around the result, for browsers without WASM.

use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request, State};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use contact_client::net::types::{ContactFormResult, ContactRequest, ContactSubmission};
use contact_client::state::contact::ContactFormSeed;
use leptos::config::LeptosOptions;
use leptos::prelude::provide_context;

use crate::services::contact;
use crate::state::AppState;

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Form-level message for a body that is not a `ContactRequest`.
pub const INVALID_REQUEST: &str = "The form could not be read. Please reload the page and try again.";

/// `POST /api/contact` — run the contact action.
///
/// Always answers 200 with a `ContactFormResult`; failures are described in
/// the result, never as an HTTP error.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Json<ContactFormResult> {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "contact request rejected");
            return Json(ContactFormResult::with_message(INVALID_REQUEST));
        }
    };

    let result = contact::submit(state.inbox.as_ref(), request.previous.as_ref(), request.form).await;
    Json(result)
}

/// `POST /contact` — run the contact action for a plain HTML form post and
/// render the contact page with the outcome.
pub async fn submit_contact_page(state: AppState, options: LeptosOptions, request: Request) -> Response {
    let (parts, body) = request.into_parts();

    let seed = match Form::<ContactSubmission>::from_request(Request::from_parts(parts.clone(), body), &()).await {
        Ok(Form(submission)) => {
            let result = contact::submit(state.inbox.as_ref(), None, submission.clone()).await;
            contact_seed(submission, result)
        }
        Err(rejection) => {
            tracing::debug!(error = %rejection, "contact form post rejected");
            contact_seed(ContactSubmission::default(), ContactFormResult::with_message(INVALID_REQUEST))
        }
    };

    let render = leptos_axum::render_app_to_stream_with_context(
        {
            let options = options.clone();
            move || {
                provide_context(options.clone());
                provide_context(seed.clone());
            }
        },
        move || contact_client::app::shell(options.clone()),
    );
    render(Request::from_parts(parts, Body::empty())).await.into_response()
}

/// Page seed for a form post: typed values stay unless the message went out.
pub(crate) fn contact_seed(submission: ContactSubmission, result: ContactFormResult) -> ContactFormSeed {
    let submission = if result.is_clean() { ContactSubmission::default() } else { submission };
    ContactFormSeed { submission, result: Some(result) }
}
