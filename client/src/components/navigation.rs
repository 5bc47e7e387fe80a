//! Site navigation: inline list on wide viewports, disclosure menu on
//! narrow ones.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the current path from the router so the matching link carries
//! `aria-current="page"`. Both lists render the same registry in the same
//! order; CSS decides which one a viewport sees.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::icons::MenuIcon;
use crate::state::disclosure::DisclosureState;
use crate::state::nav::{NAV_LINKS, aria_current};
use crate::util::id::use_id;

#[cfg(all(test, feature = "ssr"))]
#[path = "navigation_test.rs"]
mod navigation_test;

#[component]
pub fn Navigation() -> impl IntoView {
    let pathname = use_location().pathname;
    let menu_id = use_id();
    let disclosure = RwSignal::new(DisclosureState::new(menu_id.clone()));

    view! {
        <div>
            <nav class="hidden md:block">
                <NavList class="flex gap-x-4 flex-wrap" pathname=pathname/>
            </nav>

            <nav class="flex items-center justify-end md:hidden">
                <button
                    aria-controls=menu_id.clone()
                    aria-expanded=move || disclosure.with(DisclosureState::aria_expanded)
                    on:click=move |_| disclosure.update(DisclosureState::toggle)
                    class="rounded p-2 hover:bg-neutral-100"
                    type="button"
                >
                    <MenuIcon/>
                    <span class="sr-only">"Navigation menu"</span>
                </button>
            </nav>
            <div hidden=move || !disclosure.with(|d| d.is_visible) id=menu_id>
                <NavList class="grid py-4 px-2 gap-y-2" pathname=pathname/>
            </div>
        </div>
    }
}

/// One rendering of the link registry.
#[component]
fn NavList(class: &'static str, #[prop(into)] pathname: Signal<String>) -> impl IntoView {
    view! {
        <ul class=class role="list">
            {NAV_LINKS
                .iter()
                .map(|link| {
                    let href = link.href;
                    view! {
                        <li>
                            <a
                                aria-current=move || pathname.with(|p| aria_current(href, p))
                                class="aria-[current]:underline"
                                href=href
                            >
                                {link.label}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
