//! Accessible description computation

use ariaq_dom::NodeRef;

use crate::idref::referenced_text;

/// Accessible description of `node`, taken solely from `aria-describedby`
pub fn accessible_description(node: NodeRef<'_>) -> Option<String> {
    referenced_text(node, "aria-describedby")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ariaq_html::parse_html;

    #[test]
    fn test_describedby_chain() {
        let doc = parse_html(
            r#"<button id="x" aria-describedby="hint warn" title="ignored">Delete</button>
               <p id="warn">Cannot be undone.</p>
               <p id="hint"> Removes the file. </p>"#,
        );
        let button = doc.get_element_by_id("x").unwrap();
        assert_eq!(
            accessible_description(button).as_deref(),
            Some("Removes the file. Cannot be undone.")
        );
    }

    #[test]
    fn test_no_description() {
        let doc = parse_html(r#"<button id="x" title="Tip">Go</button><button id="y" aria-describedby="z">Go</button>"#);
        assert_eq!(accessible_description(doc.get_element_by_id("x").unwrap()), None);
        assert_eq!(accessible_description(doc.get_element_by_id("y").unwrap()), None);
    }
}
