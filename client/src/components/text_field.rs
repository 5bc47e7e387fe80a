//! Labeled text controls with inline validation messages.
//!
//! DESIGN
//! ======
//! Both variants share the same error wiring: when an error is present the
//! control is marked `aria-invalid="true"` and points at the message span
//! through `aria-describedby`. The span id comes from `use_id`, so the
//! linkage is stable between server render and hydration.

use leptos::prelude::*;

use crate::components::icons::AlertTriangleIcon;
use crate::util::id::use_id;

#[cfg(test)]
#[path = "text_field_test.rs"]
mod text_field_test;

const CONTROL_CLASS: &str = "border rounded px-3 py-1";

/// Value for the control's `aria-invalid` attribute.
#[must_use]
pub fn aria_invalid(error: Option<&str>) -> &'static str {
    if error.is_some() { "true" } else { "false" }
}

/// Value for `aria-describedby`: the message id, only while an error shows.
#[must_use]
pub fn described_by(id: &str, error: Option<&str>) -> Option<String> {
    error.map(|_| id.to_owned())
}

/// Single-line input.
#[component]
pub fn TextInputField(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    let id = use_id();
    let message_id = id.clone();

    view! {
        <div class="grid gap-y-1">
            <label class="grid gap-y-1">
                <span>{label}</span>
                <input
                    aria-describedby=move || error.with(|e| described_by(&message_id, e.as_deref()))
                    aria-invalid=move || error.with(|e| aria_invalid(e.as_deref()))
                    autocomplete=autocomplete
                    class=CONTROL_CLASS
                    name=name
                    type=input_type
                    value=value.get_untracked()
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
            <FieldError id=id error=error/>
        </div>
    }
}

/// Multi-line input.
#[component]
pub fn TextAreaField(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let id = use_id();
    let message_id = id.clone();

    view! {
        <div class="grid gap-y-1">
            <label class="grid gap-y-1">
                <span>{label}</span>
                <textarea
                    aria-describedby=move || error.with(|e| described_by(&message_id, e.as_deref()))
                    aria-invalid=move || error.with(|e| aria_invalid(e.as_deref()))
                    class=CONTROL_CLASS
                    name=name
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                >
                    {value.get_untracked()}
                </textarea>
            </label>
            <FieldError id=id error=error/>
        </div>
    }
}

/// Message span rendered below a control while it has an error.
#[component]
fn FieldError(id: String, error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! {
                <span class="text-red-600 flex items-center gap-x-2" id=id.clone()>
                    <AlertTriangleIcon class="size-5"/>
                    {message}
                </span>
            }
        })
    }
}
