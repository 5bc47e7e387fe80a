//! Fixed navigation link registry.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// One entry in the site navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub href: &'static str,
    pub label: &'static str,
}

/// Every navigation link, in rendering order.
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { id: "home", href: "/", label: "Home" },
    NavLink { id: "about", href: "/about", label: "About" },
    NavLink { id: "search", href: "/search", label: "Search" },
    NavLink { id: "network", href: "/network", label: "Network" },
    NavLink { id: "contact", href: "/contact", label: "Contact" },
];

/// A link is current only on an exact path match.
#[must_use]
pub fn is_current(href: &str, pathname: &str) -> bool {
    href == pathname
}

/// Value for the anchor's `aria-current` attribute; `None` omits it.
#[must_use]
pub fn aria_current(href: &str, pathname: &str) -> Option<&'static str> {
    is_current(href, pathname).then_some("page")
}
