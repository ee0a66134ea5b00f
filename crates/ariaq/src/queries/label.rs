//! Queries by associated `<label>` text

use ariaq_dom::{Document, NodeRef};

use super::single;
use crate::error::{QueryError, QueryKind, Result};
use crate::found::Found;
use crate::matchers::TextMatch;

/// Form control a label points at
///
/// A non-empty `for` attribute is resolved by id across the document;
/// otherwise the first nested `input`, `select` or `textarea` is used.
fn label_target(label: NodeRef<'_>) -> Option<NodeRef<'_>> {
    match label.attr("for").filter(|id| !id.is_empty()) {
        Some(id) => label.document().get_element_by_id(id),
        None => label.find_descendant(|n| n.has_tag(&["input", "select", "textarea"])),
    }
}

/// Element labelled by text matching `text`
///
/// Labels resolving to the same control count once. Fails when the matching
/// labels point at more than one control.
pub fn query_by_label_text<'d>(
    document: &'d Document,
    text: impl Into<TextMatch>,
) -> Result<Option<Found<'d>>> {
    let matcher = text.into();

    let mut targets: Vec<NodeRef<'d>> = Vec::new();
    for label in document.elements().filter(|n| n.tag() == Some("label")) {
        if !matcher.matches(&label.text()) {
            continue;
        }
        match label_target(label) {
            Some(target) if !targets.contains(&target) => targets.push(target),
            Some(_) => {}
            None => tracing::trace!("Label {:?} has no target", label),
        }
    }

    tracing::debug!(
        "query_by_label_text '{}' resolved {} targets",
        matcher.target(),
        targets.len()
    );
    single(targets, QueryKind::Label, matcher.value(), "get_all_by_label_text")
}

/// Like [`query_by_label_text`], but fails when nothing matches
pub fn get_by_label_text<'d>(document: &'d Document, text: impl Into<TextMatch>) -> Result<Found<'d>> {
    let matcher = text.into();
    query_by_label_text(document, matcher.clone())?
        .ok_or_else(|| QueryError::none(QueryKind::Label, matcher.value(), "query_by_label_text"))
}
