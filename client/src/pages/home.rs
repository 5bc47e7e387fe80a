//! Landing page pointing at the contact example.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="p-8">
            "The example lives on the "
            <a class="underline" href="/contact">"contact page"</a>
            "."
        </main>
    }
}
