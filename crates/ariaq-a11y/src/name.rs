//! Accessible name computation
//!
//! First satisfied rule wins:
//! 1. `aria-labelledby` references (only a non-empty result counts)
//! 2. `aria-label`
//! 3. Tag-specific content (`legend`, `label[for]`, `alt`, element text)
//! 4. `title`

use ariaq_dom::NodeRef;

use crate::idref::referenced_text;

/// Accessible name of `node`, or `None` when no rule produces one
pub fn accessible_name(node: NodeRef<'_>) -> Option<String> {
    if let Some(name) = referenced_text(node, "aria-labelledby") {
        return Some(name);
    }
    if let Some(label) = non_blank(node.attr("aria-label")) {
        return Some(label);
    }
    if let Some(name) = name_from_content(node) {
        return Some(name);
    }
    non_blank(node.attr("title"))
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

fn name_from_content(node: NodeRef<'_>) -> Option<String> {
    match node.tag()? {
        "fieldset" => node
            .find_descendant(|n| n.tag() == Some("legend"))
            .map(|legend| legend.text()),
        "input" | "textarea" | "select" => {
            let id = node.attr("id").filter(|id| !id.is_empty())?;
            node.document()
                .find_element(|n| n.tag() == Some("label") && n.attr("for") == Some(id))
                .map(|label| label.text())
        }
        "img" => node.attr("alt").map(|alt| alt.trim().to_string()),
        "a" => {
            let alt = node
                .find_descendant(|n| n.tag() == Some("img"))
                .and_then(|img| img.attr("alt"));
            match alt {
                Some(alt) => {
                    let text = node.text();
                    let parts: Vec<&str> = [alt.trim(), text.as_str()]
                        .into_iter()
                        .filter(|p| !p.is_empty())
                        .collect();
                    Some(parts.join(" "))
                }
                None => non_blank(Some(node.text().as_str())),
            }
        }
        "button" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => non_blank(Some(node.text().as_str())),
        _ => None,
    }
}
