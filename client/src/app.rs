//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{contact::ContactPage, home::HomePage};
use crate::util::id::IdScope;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the id scope shared by every component in this render and sets
/// up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Fresh per render so server and client generate the same id sequence.
    provide_context(IdScope::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/contact-site.css"/>
        <Title text="Contact"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
            </Routes>
        </Router>
    }
}
