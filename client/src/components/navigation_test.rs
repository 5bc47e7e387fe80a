use leptos_router::components::Router;
use leptos_router::location::RequestUrl;

use super::*;
use crate::util::id::IdScope;
use crate::util::test_html::{attr, has_attr, opening_tags};

fn render_at(path: &str) -> String {
    let owner = Owner::new_root(None);
    let path = path.to_owned();
    owner.with(|| {
        provide_context(RequestUrl::new(&path));
        provide_context(IdScope::default());
        view! {
            <Router>
                <Navigation/>
            </Router>
        }
        .to_html()
    })
}

#[test]
fn contact_path_marks_only_contact_links() {
    let html = render_at("/contact");
    let anchors = opening_tags(&html, "a");
    assert_eq!(anchors.len(), NAV_LINKS.len() * 2, "{html}");

    let current: Vec<_> = anchors.iter().filter(|a| attr(a, "aria-current").is_some()).collect();
    assert_eq!(current.len(), 2, "{html}");
    for anchor in current {
        assert_eq!(attr(anchor, "aria-current"), Some("page"), "{html}");
        assert_eq!(attr(anchor, "href"), Some("/contact"), "{html}");
    }
}

#[test]
fn home_path_marks_only_home_links() {
    let html = render_at("/");
    let current: Vec<_> = opening_tags(&html, "a").into_iter().filter(|a| attr(a, "aria-current").is_some()).collect();
    assert_eq!(current.len(), 2, "{html}");
    assert!(current.iter().all(|a| attr(a, "href") == Some("/")), "{html}");
}

#[test]
fn menu_button_controls_hidden_menu() {
    let html = render_at("/contact");
    let button = opening_tags(&html, "button")[0];
    assert_eq!(attr(button, "aria-expanded"), Some("false"), "{html}");
    assert_eq!(attr(button, "type"), Some("button"), "{html}");

    let controls = attr(button, "aria-controls").expect("aria-controls");
    let menus: Vec<_> = opening_tags(&html, "div").into_iter().filter(|d| attr(d, "id") == Some(controls)).collect();
    assert_eq!(menus.len(), 1, "{html}");
    assert!(has_attr(menus[0], "hidden"), "{html}");
}

#[test]
fn menu_icon_is_hidden_without_empty_class() {
    let html = render_at("/contact");
    let svg = opening_tags(&html, "svg")[0];
    assert_eq!(attr(svg, "aria-hidden"), Some("true"), "{html}");
    assert!(!html.contains(r#"class="""#), "{html}");
}
