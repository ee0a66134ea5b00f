//! Query results

use std::fmt;

use ariaq_a11y::{accessible_description, accessible_name, implicit_role};
use ariaq_dom::NodeRef;

use crate::matchers::TextMatch;

/// One element matched by a query
///
/// Borrows the queried document; only produced by a successful query.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Found<'a> {
    node: NodeRef<'a>,
}

impl<'a> Found<'a> {
    pub(crate) fn new(node: NodeRef<'a>) -> Self {
        Self { node }
    }

    /// Underlying DOM node
    pub fn node(&self) -> NodeRef<'a> {
        self.node
    }

    /// Lowercase tag name
    pub fn tag(&self) -> &'a str {
        self.node.tag().unwrap_or_default()
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.node.attr(name)
    }

    /// Deep text content, trimmed
    pub fn text(&self) -> String {
        self.node.text()
    }

    /// Explicit `role` attribute if set, otherwise the implicit role
    pub fn role(&self) -> Option<String> {
        let explicit = self
            .node
            .attr("role")
            .map(|r| r.trim().to_ascii_lowercase())
            .filter(|r| !r.is_empty());
        explicit.or_else(|| implicit_role(self.node).map(|r| r.as_str().to_string()))
    }

    pub fn accessible_name(&self) -> Option<String> {
        accessible_name(self.node)
    }

    pub fn accessible_description(&self) -> Option<String> {
        accessible_description(self.node)
    }

    /// Attribute presence, or equality with `value` when given
    pub fn to_have_attribute(&self, name: &str, value: Option<&str>) -> bool {
        match (self.node.attr(name), value) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(actual), Some(expected)) => actual == expected,
        }
    }

    /// Deep trimmed text compared with the given matcher
    pub fn to_have_text_content(&self, text: impl Into<TextMatch>) -> bool {
        text.into().matches(&self.node.text())
    }
}

impl fmt::Debug for Found<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Found").field(&self.node).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ariaq_html::parse_html;

    #[test]
    fn test_assertions() {
        let doc = parse_html(r#"<button id="b" type="submit" disabled> Send <b>now</b> </button>"#);
        let found = Found::new(doc.get_element_by_id("b").unwrap());

        assert!(found.to_have_attribute("type", None));
        assert!(found.to_have_attribute("type", Some("submit")));
        assert!(!found.to_have_attribute("type", Some("button")));
        assert!(found.to_have_attribute("disabled", Some("")));
        assert!(!found.to_have_attribute("name", None));

        assert!(found.to_have_text_content("Send now"));
        assert!(!found.to_have_text_content("send now"));
        assert!(found.to_have_text_content(TextMatch::substring("SEND")));
    }

    #[test]
    fn test_accessors() {
        let doc = parse_html(r#"<div id="d" role=" Alert " title="Heads up">Saved</div><nav id="n"></nav>"#);
        let div = Found::new(doc.get_element_by_id("d").unwrap());
        let nav = Found::new(doc.get_element_by_id("n").unwrap());

        assert_eq!(div.tag(), "div");
        assert_eq!(div.role().as_deref(), Some("alert"));
        assert_eq!(div.attribute("title"), Some("Heads up"));
        assert_eq!(div.text(), "Saved");
        assert_eq!(div.accessible_name().as_deref(), Some("Heads up"));
        assert_eq!(div.accessible_description(), None);
        assert_eq!(nav.role().as_deref(), Some("navigation"));
    }
}
