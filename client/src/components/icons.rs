//! Inline SVG icons. Decorative only, so always hidden from assistive tech.

use leptos::prelude::*;

/// Three-bar menu icon.
#[component]
pub fn MenuIcon(#[prop(optional)] class: Option<&'static str>) -> impl IntoView {
    view! {
        <svg
            aria-hidden="true"
            class=class
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <line x1="4" x2="20" y1="12" y2="12"></line>
            <line x1="4" x2="20" y1="6" y2="6"></line>
            <line x1="4" x2="20" y1="18" y2="18"></line>
        </svg>
    }
}

/// Warning triangle shown next to validation messages.
#[component]
pub fn AlertTriangleIcon(#[prop(optional)] class: Option<&'static str>) -> impl IntoView {
    view! {
        <svg
            aria-hidden="true"
            class=class
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3"></path>
            <path d="M12 9v4"></path>
            <path d="M12 17h.01"></path>
        </svg>
    }
}
