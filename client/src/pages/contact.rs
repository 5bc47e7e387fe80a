//! Contact page: navigation header plus the contact form section.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::navigation::Navigation;
use crate::util::id::use_id;

#[cfg(all(test, feature = "ssr"))]
#[path = "contact_test.rs"]
mod contact_test;

#[component]
pub fn ContactPage() -> impl IntoView {
    let heading_id = use_id();

    view! {
        <div class="min-h-full grid grid-rows-[auto_1fr] mx-auto max-w-screen-lg px-8">
            <a
                class="fixed top-0 left-0 -translate-y-full focus:translate-y-0 p-4 bg-white"
                href="#main-content"
            >
                "Skip to main content"
            </a>

            <header class="border-b py-2">
                <Navigation/>
            </header>

            <main class="py-8" id="main-content">
                <section aria-labelledby=heading_id.clone()>
                    <h2 id=heading_id.clone()>"The contact form section"</h2>
                    <ContactForm/>
                </section>
            </main>
        </div>
    }
}
