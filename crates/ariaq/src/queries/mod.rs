//! Query engine
//!
//! Every query walks the document in order, collects matching elements and
//! then either returns them all or reduces them to a single [`Found`].
//! `query_*` functions return `Ok(None)` when nothing matches; `get_*`
//! functions turn that into [`QueryError::NoElementsFound`].
//!
//! [`Found`]: crate::Found
//! [`QueryError::NoElementsFound`]: crate::QueryError::NoElementsFound

mod label;
mod role;
mod text;

pub use label::{get_by_label_text, query_by_label_text};
pub use role::{get_all_by_role, get_by_role, query_all_by_role, query_by_role};
pub use text::{get_by_text, query_by_text};

use ariaq_dom::{Document, NodeRef};

use crate::error::{QueryError, QueryKind, Result};
use crate::found::Found;

/// Elements considered by text and role queries, in document order
///
/// The `<html>` and `<body>` roots are skipped unless `include_roots` is set.
/// `<head>` and its children stay in, so a `<title>` can match text queries.
fn candidates(document: &Document, include_roots: bool) -> impl Iterator<Item = NodeRef<'_>> {
    document
        .elements()
        .filter(move |n| include_roots || !n.has_tag(&["html", "body"]))
}

/// First element of `matches` that contains another element of `matches`
///
/// Pairs are scanned row-major, so the earliest ancestor in document order wins.
fn prefer_ancestor<'a>(matches: &[NodeRef<'a>]) -> Option<NodeRef<'a>> {
    for (i, outer) in matches.iter().enumerate() {
        for (j, inner) in matches.iter().enumerate() {
            if i != j && outer.is_ancestor_of(inner) {
                tracing::trace!("Disambiguated {} matches to {:?}", matches.len(), outer);
                return Some(*outer);
            }
        }
    }
    None
}

/// Reduce a match set to at most one element
///
/// Nested matches resolve to the outermost; unrelated matches are an error
/// that points at `alt_method`.
fn single<'a>(
    matches: Vec<NodeRef<'a>>,
    kind: QueryKind,
    value: &str,
    alt_method: &'static str,
) -> Result<Option<Found<'a>>> {
    match matches.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(Found::new(*only))),
        many => prefer_ancestor(many)
            .map(|node| Some(Found::new(node)))
            .ok_or_else(|| QueryError::multiple(kind, value, many.len(), alt_method)),
    }
}
