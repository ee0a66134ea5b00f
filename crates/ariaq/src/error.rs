//! Query errors

use std::fmt;

/// What a query searched by, as worded in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Label,
    Text,
    Role,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Text => "text",
            Self::Role => "role",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single-element or `get_*` query
///
/// `alt_method` names the query function the caller should switch to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("No elements found with {kind} '{value}'. Use {alt_method} if expecting no matches.")]
    NoElementsFound {
        kind: QueryKind,
        value: String,
        alt_method: &'static str,
    },

    #[error(
        "Found {count} elements with {kind} '{value}'. Use {alt_method} if multiple matches are expected."
    )]
    MultipleElementsFound {
        kind: QueryKind,
        value: String,
        count: usize,
        alt_method: &'static str,
    },
}

impl QueryError {
    pub(crate) fn none(kind: QueryKind, value: impl Into<String>, alt_method: &'static str) -> Self {
        Self::NoElementsFound {
            kind,
            value: value.into(),
            alt_method,
        }
    }

    pub(crate) fn multiple(
        kind: QueryKind,
        value: impl Into<String>,
        count: usize,
        alt_method: &'static str,
    ) -> Self {
        Self::MultipleElementsFound {
            kind,
            value: value.into(),
            count,
            alt_method,
        }
    }

    /// Same error pointing at a different alternative query
    pub(crate) fn with_alt_method(self, method: &'static str) -> Self {
        match self {
            Self::NoElementsFound { kind, value, .. } => Self::NoElementsFound {
                kind,
                value,
                alt_method: method,
            },
            Self::MultipleElementsFound {
                kind, value, count, ..
            } => Self::MultipleElementsFound {
                kind,
                value,
                count,
                alt_method: method,
            },
        }
    }

    /// Number of elements found (zero for [`QueryError::NoElementsFound`])
    pub fn count(&self) -> usize {
        match self {
            Self::NoElementsFound { .. } => 0,
            Self::MultipleElementsFound { count, .. } => *count,
        }
    }

    /// The searched label, text or role
    pub fn value(&self) -> &str {
        match self {
            Self::NoElementsFound { value, .. } | Self::MultipleElementsFound { value, .. } => value,
        }
    }

    pub fn kind(&self) -> QueryKind {
        match self {
            Self::NoElementsFound { kind, .. } | Self::MultipleElementsFound { kind, .. } => *kind,
        }
    }

    pub fn alt_method(&self) -> &'static str {
        match self {
            Self::NoElementsFound { alt_method, .. }
            | Self::MultipleElementsFound { alt_method, .. } => alt_method,
        }
    }
}

/// Result type for queries
pub type Result<T> = std::result::Result<T, QueryError>;
