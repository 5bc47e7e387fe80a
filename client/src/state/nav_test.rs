use super::*;

#[test]
fn registry_order_is_fixed() {
    let ids: Vec<_> = NAV_LINKS.iter().map(|l| l.id).collect();
    assert_eq!(ids, ["home", "about", "search", "network", "contact"]);
}

#[test]
fn registry_hrefs_are_unique() {
    for (i, a) in NAV_LINKS.iter().enumerate() {
        for b in &NAV_LINKS[i + 1..] {
            assert_ne!(a.href, b.href);
        }
    }
}

#[test]
fn only_contact_is_current_on_contact_path() {
    let current: Vec<_> = NAV_LINKS
        .iter()
        .filter(|l| aria_current(l.href, "/contact").is_some())
        .map(|l| l.label)
        .collect();
    assert_eq!(current, ["Contact"]);
}

#[test]
fn aria_current_is_page_iff_href_matches() {
    for path in ["/", "/about", "/search", "/network", "/contact", "/elsewhere"] {
        for link in &NAV_LINKS {
            let expected = if link.href == path { Some("page") } else { None };
            assert_eq!(aria_current(link.href, path), expected, "{} on {path}", link.id);
        }
    }
}

#[test]
fn home_is_not_current_on_nested_paths() {
    assert!(!is_current("/", "/contact"));
    assert!(is_current("/", "/"));
}

#[test]
fn trailing_slash_is_not_a_match() {
    assert!(!is_current("/contact", "/contact/"));
}
