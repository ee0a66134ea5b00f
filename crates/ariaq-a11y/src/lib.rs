//! ariaq Accessibility
//!
//! Accessibility computations over a parsed [`ariaq_dom::Document`].
//!
//! Features:
//! - ARIA role vocabulary
//! - Implicit role resolution from tag and attribute context
//! - Accessible name computation (labelledby, aria-label, content, title)
//! - Accessible description computation (describedby)

pub mod aria;
pub mod description;
pub mod implicit;
pub mod name;

mod idref;

pub use aria::AriaRole;
pub use description::accessible_description;
pub use implicit::{RoleRule, implicit_role};
pub use name::accessible_name;

/// Accessibility error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum A11yError {
    #[error("Unknown ARIA role: {0}")]
    UnknownRole(String),
}
