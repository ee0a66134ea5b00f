//! Text and role matchers
//!
//! [`TextMatch`] compares extracted element text against a target string.
//! [`RoleQuery`] bundles a role with optional name, description and
//! `aria-current` constraints and decides whether an element satisfies it.

use ariaq_a11y::{AriaRole, accessible_description, accessible_name, implicit_role};
use ariaq_dom::NodeRef;

/// Exact or case-insensitive substring text comparison
///
/// The target is trimmed once at construction. Candidates are compared as
/// given; callers pass already-trimmed element text. The untrimmed input is
/// kept for error messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextMatch {
    value: String,
    target: String,
    exact: bool,
}

impl TextMatch {
    pub fn new(text: impl AsRef<str>, exact: bool) -> Self {
        let value = text.as_ref().to_string();
        Self {
            target: value.trim().to_string(),
            value,
            exact,
        }
    }

    /// Case-sensitive whole-string equality
    pub fn exact(text: impl AsRef<str>) -> Self {
        Self::new(text, true)
    }

    /// Case-insensitive containment
    pub fn substring(text: impl AsRef<str>) -> Self {
        Self::new(text, false)
    }

    /// Trimmed target text
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Text exactly as the caller supplied it
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_exact(&self) -> bool {
        self.exact
    }

    pub fn matches(&self, candidate: &str) -> bool {
        if self.exact {
            candidate == self.target
        } else {
            candidate.to_lowercase().contains(&self.target.to_lowercase())
        }
    }
}

impl From<&str> for TextMatch {
    fn from(text: &str) -> Self {
        Self::exact(text)
    }
}

impl From<String> for TextMatch {
    fn from(text: String) -> Self {
        Self::exact(text)
    }
}

impl From<&String> for TextMatch {
    fn from(text: &String) -> Self {
        Self::exact(text)
    }
}

impl PartialEq<str> for TextMatch {
    fn eq(&self, other: &str) -> bool {
        self.matches(other)
    }
}

impl PartialEq<&str> for TextMatch {
    fn eq(&self, other: &&str) -> bool {
        self.matches(other)
    }
}

/// Constraint on the `aria-current` attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Current {
    /// Whether `aria-current` is exactly `"true"`
    State(bool),
    /// Literal attribute value, e.g. `"page"` or `"step"`
    Token(String),
}

impl Current {
    pub fn matches(&self, node: NodeRef<'_>) -> bool {
        let value = node.attr("aria-current");
        match self {
            Self::State(expected) => (value == Some("true")) == *expected,
            Self::Token(token) => value == Some(token.as_str()),
        }
    }
}

impl From<bool> for Current {
    fn from(state: bool) -> Self {
        Self::State(state)
    }
}

impl From<&str> for Current {
    fn from(value: &str) -> Self {
        if value.eq_ignore_ascii_case("true") {
            Self::State(true)
        } else if value.eq_ignore_ascii_case("false") {
            Self::State(false)
        } else {
            Self::Token(value.to_string())
        }
    }
}

/// Role lookup with optional accessible name, description and current state
///
/// ```
/// use ariaq::RoleQuery;
///
/// let query = RoleQuery::new("link").name("Home").current("page");
/// assert_eq!(query.role(), "link");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleQuery {
    role: String,
    name: Option<String>,
    description: Option<String>,
    current: Option<Current>,
}

impl RoleQuery {
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            name: None,
            description: None,
            current: None,
        }
    }

    /// Require this exact accessible name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Require this exact accessible description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Require an `aria-current` state or token
    pub fn current(mut self, current: impl Into<Current>) -> Self {
        self.current = Some(current.into());
        self
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    /// Role target `document` also considers the `<html>` and `<body>` roots
    pub(crate) fn includes_roots(&self) -> bool {
        AriaRole::Document.is(&self.role)
    }

    /// True if `node` has the role and satisfies every constraint
    pub fn matches(&self, node: NodeRef<'_>) -> bool {
        if !self.has_role(node) {
            return false;
        }
        if let Some(name) = &self.name {
            if accessible_name(node).as_deref() != Some(name.as_str()) {
                return false;
            }
        }
        if let Some(description) = &self.description {
            if accessible_description(node).as_deref() != Some(description.as_str()) {
                return false;
            }
        }
        self.current.as_ref().is_none_or(|current| current.matches(node))
    }

    fn has_role(&self, node: NodeRef<'_>) -> bool {
        let target = self.role.trim();
        let explicit = node
            .attr("role")
            .is_some_and(|role| role.trim().eq_ignore_ascii_case(target));
        explicit || implicit_role(node).is_some_and(|role| role.is(target))
    }
}

impl From<&str> for RoleQuery {
    fn from(role: &str) -> Self {
        Self::new(role)
    }
}

impl From<String> for RoleQuery {
    fn from(role: String) -> Self {
        Self::new(role)
    }
}

impl From<AriaRole> for RoleQuery {
    fn from(role: AriaRole) -> Self {
        Self::new(role.as_str())
    }
}
