//! ID reference lists (`aria-labelledby`, `aria-describedby`)

use ariaq_dom::NodeRef;

/// Text of every element referenced by a whitespace-separated id list.
///
/// References are resolved against the whole document. Missing targets and
/// targets with no text are skipped; the survivors are joined with a single
/// space. Returns `None` when the attribute is absent or nothing survives.
pub(crate) fn referenced_text(node: NodeRef<'_>, attribute: &str) -> Option<String> {
    let refs = node.attr(attribute)?;
    let document = node.document();

    let mut texts = Vec::new();
    for id in refs.split_whitespace() {
        match document.get_element_by_id(id) {
            Some(target) => {
                let text = target.text();
                if !text.is_empty() {
                    texts.push(text);
                }
            }
            None => tracing::trace!("{} reference #{} does not resolve", attribute, id),
        }
    }

    if texts.is_empty() {
        None
    } else {
        Some(texts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ariaq_html::parse_html;

    #[test]
    fn test_order_follows_reference_list() {
        let doc = parse_html(
            r#"<input id="field" aria-labelledby="c a missing b">
               <span id="a">Middle</span><span id="b">Last</span><span id="c">First</span>"#,
        );
        let input = doc.get_element_by_id("field").unwrap();
        assert_eq!(
            referenced_text(input, "aria-labelledby").as_deref(),
            Some("First Middle Last")
        );
    }

    #[test]
    fn test_all_missing_or_empty() {
        let doc = parse_html(r#"<input id="field" aria-describedby="gone empty"><div id="empty"> </div>"#);
        let input = doc.get_element_by_id("field").unwrap();
        assert_eq!(referenced_text(input, "aria-describedby"), None);
        assert_eq!(referenced_text(input, "aria-labelledby"), None);
    }
}
