//! Queries by ARIA role

use ariaq_dom::{Document, NodeRef};

use super::{candidates, single};
use crate::error::{QueryError, QueryKind, Result};
use crate::found::Found;
use crate::matchers::RoleQuery;

fn matching<'d>(document: &'d Document, query: &RoleQuery) -> Vec<NodeRef<'d>> {
    let matches: Vec<_> = candidates(document, query.includes_roots())
        .filter(|n| query.matches(*n))
        .collect();
    tracing::debug!("Role query {:?} matched {} elements", query, matches.len());
    matches
}

/// Element with the given role and constraints
///
/// Nested matches resolve to the outer element.
pub fn query_by_role<'d>(document: &'d Document, query: impl Into<RoleQuery>) -> Result<Option<Found<'d>>> {
    let query = query.into();
    single(
        matching(document, &query),
        QueryKind::Role,
        query.role(),
        "query_all_by_role",
    )
}

/// Like [`query_by_role`], but fails when nothing matches
pub fn get_by_role<'d>(document: &'d Document, query: impl Into<RoleQuery>) -> Result<Found<'d>> {
    let query = query.into();
    query_by_role(document, query.clone())
        .map_err(|e| e.with_alt_method("get_all_by_role"))?
        .ok_or_else(|| QueryError::none(QueryKind::Role, query.role(), "query_by_role"))
}

/// Every element with the given role and constraints, in document order
pub fn query_all_by_role<'d>(document: &'d Document, query: impl Into<RoleQuery>) -> Vec<Found<'d>> {
    let query = query.into();
    matching(document, &query).into_iter().map(Found::new).collect()
}

/// Like [`query_all_by_role`], but fails when nothing matches
pub fn get_all_by_role<'d>(document: &'d Document, query: impl Into<RoleQuery>) -> Result<Vec<Found<'d>>> {
    let query = query.into();
    let found = query_all_by_role(document, query.clone());
    if found.is_empty() {
        return Err(QueryError::none(QueryKind::Role, query.role(), "query_all_by_role"));
    }
    Ok(found)
}
