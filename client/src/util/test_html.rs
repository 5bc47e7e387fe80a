//! Minimal tag scanning over server-rendered HTML for render assertions.

/// Every opening tag `<name ...>` in `html`, in document order.
pub fn opening_tags<'a>(html: &'a str, name: &str) -> Vec<&'a str> {
    let open = format!("<{name}");
    let mut tags = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(&open) {
        let after = &rest[start + open.len()..];
        let boundary = after.chars().next().is_some_and(|c| c.is_whitespace() || c == '>' || c == '/');
        let Some(end) = after.find('>') else {
            break;
        };
        if boundary {
            tags.push(&rest[start..start + open.len() + end + 1]);
        }
        rest = &after[end + 1..];
    }
    tags
}

/// Value of attribute `name` inside a single opening tag.
pub fn attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {name}=\"");
    let start = tag.find(&needle)? + needle.len();
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}

/// Whether a single opening tag carries `name`, with or without a value.
pub fn has_attr(tag: &str, name: &str) -> bool {
    let bare = format!(" {name}");
    tag.match_indices(&bare).any(|(i, _)| {
        tag[i + bare.len()..].chars().next().is_some_and(|c| c.is_whitespace() || c == '=' || c == '>' || c == '/')
    })
}

#[test]
fn scans_tags_and_attributes() {
    let html = r#"<div id="a"><input name="x" hidden/><i>t</i><input name="y"></div>"#;
    let inputs = opening_tags(html, "input");
    assert_eq!(inputs.len(), 2);
    assert_eq!(attr(inputs[0], "name"), Some("x"));
    assert!(has_attr(inputs[0], "hidden"));
    assert!(!has_attr(inputs[1], "hidden"));
    assert!(opening_tags(html, "i").len() == 1);
}
