//! Contact form wired to the server-side contact action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submit hands the typed values and the previous result to
//! `net::api::submit_contact` and replaces the stored result with whatever
//! comes back. Field errors render next to their controls; the form-level
//! message renders in a polite live region.
//!
//! The form also posts to `/contact` as a plain HTML form, so it works
//! before the WASM bundle loads. The server answers that post by rendering
//! this page again with a `ContactFormSeed` in context.

use leptos::prelude::*;

use crate::components::icons::AlertTriangleIcon;
use crate::components::text_field::{TextAreaField, TextInputField};
use crate::net::types::{ContactField, ContactSubmission};
use crate::state::contact::{ContactFormSeed, ContactFormState};

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

#[component]
pub fn ContactForm() -> impl IntoView {
    let seed = leptos::server::SharedValue::new(|| use_context::<ContactFormSeed>().unwrap_or_default()).into_inner();
    let state = RwSignal::new(ContactFormState::from_seed(&seed));
    let ContactSubmission { name, email, message } = seed.submission;
    let name = RwSignal::new(name);
    let email = RwSignal::new(email);
    let message = RwSignal::new(message);

    let error_for =
        move |field: ContactField| Signal::derive(move || state.with(|s| s.field_error(field).map(str::to_owned)));
    let banner = Signal::derive(move || state.with(|s| s.banner_message().map(str::to_owned)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = None;
        state.update(|s| started = s.begin_submit());
        let Some(ticket) = started else {
            return;
        };
        let form = ContactSubmission {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };

        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_contact(ticket.previous, form).await;
            if result.is_clean() {
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
            state.update(|s| s.finish_submit(result));
        });
    };

    let on_submit_click = move |ev: leptos::ev::MouseEvent| {
        if state.with_untracked(|s| s.pending) {
            ev.prevent_default();
        }
    };

    view! {
        <form action="/contact" class="grid gap-y-4" method="post" on:submit=on_submit>
            <TextInputField
                error=error_for(ContactField::Name)
                label="Name"
                name=ContactField::Name.as_str()
                value=name
            />
            <TextInputField
                autocomplete="email"
                error=error_for(ContactField::Email)
                label="Email"
                name=ContactField::Email.as_str()
                input_type="email"
                value=email
            />
            <TextAreaField
                error=error_for(ContactField::Message)
                label="Message"
                name=ContactField::Message.as_str()
                value=message
            />
            <div>
                <button
                    aria-disabled=move || state.with(ContactFormState::aria_disabled)
                    on:click=on_submit_click
                    class="bg-black px-4 py-2 rounded text-white font-semibold text-sm"
                    type="submit"
                >
                    "Submit"
                </button>
            </div>
            <div aria-live="polite" aria-atomic="true" class="text-red-500 flex items-center gap-x-2">
                <FormBanner message=banner/>
            </div>
        </form>
    }
}

/// Form-level message with its warning icon; renders nothing without one.
#[component]
pub fn FormBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <AlertTriangleIcon class="size-5"/>
                {text}
            }
        })
    }
}
