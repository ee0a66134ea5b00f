//! ariaq
//!
//! Accessibility-first DOM queries in the style of Testing Library: find
//! elements the way assistive technology exposes them, by label, visible
//! text or ARIA role.
//!
//! # Example
//! ```
//! use ariaq::{RoleQuery, get_by_label_text, get_by_role, parse_html};
//!
//! let doc = parse_html(r#"
//!     <label for="email">Email</label><input id="email" type="text">
//!     <button>Subscribe</button>
//! "#);
//!
//! let input = get_by_label_text(&doc, "Email").unwrap();
//! assert!(input.to_have_attribute("type", Some("text")));
//!
//! let button = get_by_role(&doc, RoleQuery::new("button").name("Subscribe")).unwrap();
//! assert!(button.to_have_text_content("Subscribe"));
//! ```

mod config;
mod error;
mod found;
mod matchers;
mod queries;
mod screen;

pub use config::Config;
pub use error::{QueryError, QueryKind, Result};
pub use found::Found;
pub use matchers::{Current, RoleQuery, TextMatch};
pub use queries::{
    get_all_by_role, get_by_label_text, get_by_role, get_by_text, query_all_by_role,
    query_by_label_text, query_by_role, query_by_text,
};
pub use screen::Screen;

pub use ariaq_a11y::{A11yError, AriaRole, accessible_description, accessible_name, implicit_role};
pub use ariaq_dom::{Document, NodeRef};
pub use ariaq_html::{HtmlParser, parse_html};

// Re-export sub-crates for advanced usage
pub use ariaq_a11y as a11y;
pub use ariaq_dom as dom;
pub use ariaq_html as html;
