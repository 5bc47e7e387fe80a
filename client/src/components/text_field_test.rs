use super::*;

#[test]
fn aria_invalid_tracks_error_presence() {
    assert_eq!(aria_invalid(Some("Required")), "true");
    assert_eq!(aria_invalid(None), "false");
}

#[test]
fn described_by_only_while_error_present() {
    assert_eq!(described_by(":c4:", Some("Required")), Some(":c4:".to_owned()));
    assert_eq!(described_by(":c4:", None), None);
}

#[cfg(feature = "ssr")]
mod render {
    use super::*;

    fn render(view: impl FnOnce() -> String) -> String {
        let owner = Owner::new_root(None);
        owner.with(view)
    }

    #[test]
    fn input_with_error_links_message() {
        let html = render(|| {
            view! {
                <TextInputField
                    label="Email"
                    name="email"
                    value=RwSignal::new(String::new())
                    error=Signal::stored(Some("Enter a valid email address".to_owned()))
                    autocomplete="email"
                    input_type="email"
                />
            }
            .to_html()
        });
        assert!(html.contains(r#"aria-invalid="true""#), "{html}");
        assert!(html.contains(r#"aria-describedby=":c0:""#), "{html}");
        assert!(html.contains(r#"id=":c0:""#), "{html}");
        assert!(html.contains(r#"type="email""#), "{html}");
        assert!(html.contains(r#"autocomplete="email""#), "{html}");
        assert_eq!(html.matches("Enter a valid email address").count(), 1, "{html}");
    }

    #[test]
    fn input_without_error_renders_no_message() {
        let html = render(|| {
            view! {
                <TextInputField
                    label="Name"
                    name="name"
                    value=RwSignal::new(String::new())
                    error=Signal::stored(None::<String>)
                />
            }
            .to_html()
        });
        assert!(html.contains(r#"aria-invalid="false""#), "{html}");
        assert!(!html.contains("aria-describedby"), "{html}");
        assert!(!html.contains("text-red-600"), "{html}");
        assert!(html.contains("Name"), "{html}");
    }

    #[test]
    fn textarea_with_error_links_message() {
        let html = render(|| {
            view! {
                <TextAreaField
                    label="Message"
                    name="message"
                    value=RwSignal::new(String::new())
                    error=Signal::stored(Some("Required".to_owned()))
                />
            }
            .to_html()
        });
        assert!(html.contains("<textarea"), "{html}");
        assert!(html.contains(r#"aria-invalid="true""#), "{html}");
        assert!(html.contains(r#"aria-describedby=":c0:""#), "{html}");
        assert!(html.contains(r#"id=":c0:""#), "{html}");
        assert_eq!(html.matches("Required").count(), 1, "{html}");
    }
}
