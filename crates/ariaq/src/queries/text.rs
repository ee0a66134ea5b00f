//! Queries by visible text content

use ariaq_dom::Document;

use super::{candidates, single};
use crate::error::{QueryError, QueryKind, Result};
use crate::found::Found;
use crate::matchers::TextMatch;

/// Element whose deep trimmed text matches `text`
///
/// Nested elements sharing the same text resolve to the outer one.
pub fn query_by_text<'d>(document: &'d Document, text: impl Into<TextMatch>) -> Result<Option<Found<'d>>> {
    let matcher = text.into();

    let matches: Vec<_> = candidates(document, false)
        .filter(|n| matcher.matches(&n.text()))
        .collect();

    tracing::debug!("query_by_text '{}' matched {} elements", matcher.target(), matches.len());
    single(matches, QueryKind::Text, matcher.value(), "query_all_by_text")
}

/// Like [`query_by_text`], but fails when nothing matches
pub fn get_by_text<'d>(document: &'d Document, text: impl Into<TextMatch>) -> Result<Found<'d>> {
    let matcher = text.into();
    query_by_text(document, matcher.clone())
        .map_err(|e| e.with_alt_method("get_all_by_text"))?
        .ok_or_else(|| QueryError::none(QueryKind::Text, matcher.value(), "query_by_text"))
}
