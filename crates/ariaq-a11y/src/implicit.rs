//! Implicit ARIA roles
//!
//! Maps a tag (and for `input`, its `type`) to the role an element carries
//! when no explicit `role` attribute applies.

use ariaq_dom::NodeRef;

use crate::aria::AriaRole;
use crate::description::accessible_description;
use crate::name::accessible_name;

/// How a tag resolves to its implicit role
#[derive(Debug, Clone, Copy)]
pub enum RoleRule {
    /// Same role for every element with the tag
    Fixed(AriaRole),
    /// Role selected by the ASCII-lowercased `type` attribute
    ByType(&'static [(&'static str, AriaRole)]),
    /// Role depends on attributes or surrounding structure
    Computed(fn(NodeRef<'_>) -> Option<AriaRole>),
}

const INPUT_TYPES: &[(&str, AriaRole)] = &[
    ("checkbox", AriaRole::Checkbox),
    ("radio", AriaRole::Radio),
    ("text", AriaRole::TextBox),
    ("search", AriaRole::SearchBox),
    ("button", AriaRole::Button),
    ("password", AriaRole::TextBox),
];

const RULES: &[(&str, RoleRule)] = &[
    ("a", RoleRule::Computed(anchor_role)),
    ("address", RoleRule::Fixed(AriaRole::Group)),
    ("article", RoleRule::Fixed(AriaRole::Article)),
    ("aside", RoleRule::Fixed(AriaRole::Complementary)),
    ("b", RoleRule::Fixed(AriaRole::Generic)),
    ("body", RoleRule::Fixed(AriaRole::Generic)),
    ("button", RoleRule::Fixed(AriaRole::Button)),
    ("fieldset", RoleRule::Fixed(AriaRole::Group)),
    ("footer", RoleRule::Computed(footer_role)),
    ("form", RoleRule::Fixed(AriaRole::Form)),
    ("h1", RoleRule::Fixed(AriaRole::Heading)),
    ("h2", RoleRule::Fixed(AriaRole::Heading)),
    ("h3", RoleRule::Fixed(AriaRole::Heading)),
    ("h4", RoleRule::Fixed(AriaRole::Heading)),
    ("h5", RoleRule::Fixed(AriaRole::Heading)),
    ("h6", RoleRule::Fixed(AriaRole::Heading)),
    ("header", RoleRule::Fixed(AriaRole::Banner)),
    ("html", RoleRule::Fixed(AriaRole::Document)),
    ("img", RoleRule::Computed(img_role)),
    ("input", RoleRule::ByType(INPUT_TYPES)),
    ("main", RoleRule::Fixed(AriaRole::Main)),
    ("meter", RoleRule::Fixed(AriaRole::Meter)),
    ("nav", RoleRule::Fixed(AriaRole::Navigation)),
    ("ol", RoleRule::Fixed(AriaRole::List)),
    ("p", RoleRule::Fixed(AriaRole::Paragraph)),
    ("select", RoleRule::Computed(select_role)),
    ("td", RoleRule::Computed(cell_role)),
    ("textarea", RoleRule::Fixed(AriaRole::TextBox)),
    ("ul", RoleRule::Fixed(AriaRole::List)),
];

/// Rule registered for a lowercase tag name
pub fn rule_for(tag: &str) -> Option<RoleRule> {
    RULES.iter().find(|(t, _)| *t == tag).map(|(_, rule)| *rule)
}

/// Implicit role of `node`, or `None` for non-elements and unmapped tags
pub fn implicit_role(node: NodeRef<'_>) -> Option<AriaRole> {
    match rule_for(node.tag()?)? {
        RoleRule::Fixed(role) => Some(role),
        RoleRule::ByType(types) => {
            let ty = node.attr("type")?.trim().to_ascii_lowercase();
            types.iter().find(|(t, _)| *t == ty).map(|(_, role)| *role)
        }
        RoleRule::Computed(compute) => compute(node),
    }
}

fn anchor_role(node: NodeRef<'_>) -> Option<AriaRole> {
    if node.has_attr("href") {
        Some(AriaRole::Link)
    } else {
        Some(AriaRole::Generic)
    }
}

fn img_role(node: NodeRef<'_>) -> Option<AriaRole> {
    let decorative = match node.attr("alt") {
        Some(alt) => alt.is_empty(),
        None => accessible_name(node).is_none() && accessible_description(node).is_none(),
    };
    if decorative {
        Some(AriaRole::Presentation)
    } else {
        Some(AriaRole::Img)
    }
}

fn select_role(node: NodeRef<'_>) -> Option<AriaRole> {
    let size = node
        .attr("size")
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(0);
    if node.has_attr("multiple") || size > 1 {
        Some(AriaRole::ListBox)
    } else {
        Some(AriaRole::ComboBox)
    }
}

fn cell_role(node: NodeRef<'_>) -> Option<AriaRole> {
    let table = node.closest_ancestor("table")?;
    match table.attr("role").map(str::trim).filter(|r| !r.is_empty()) {
        None => Some(AriaRole::Cell),
        Some(role) if AriaRole::Table.is(role) => Some(AriaRole::Cell),
        Some(role) if AriaRole::Grid.is(role) || AriaRole::TreeGrid.is(role) => {
            Some(AriaRole::GridCell)
        }
        Some(_) => None,
    }
}

fn footer_role(node: NodeRef<'_>) -> Option<AriaRole> {
    let Some(parent) = node.parent_element() else {
        return Some(AriaRole::ContentInfo);
    };

    let sectioning = parent.has_tag(&["article", "aside", "main", "nav", "section"]);
    if sectioning || scopes_footer(parent) || parent.descendants().any(scopes_footer) {
        Some(AriaRole::Generic)
    } else {
        Some(AriaRole::ContentInfo)
    }
}

fn scopes_footer(node: NodeRef<'_>) -> bool {
    node.attr("role")
        .and_then(|r| r.parse::<AriaRole>().ok())
        .is_some_and(|role| role.scopes_footer())
}
