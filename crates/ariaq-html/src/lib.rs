//! ariaq HTML Parser
//!
//! HTML5 parser built on html5ever.
//! Parses markup and converts it to the read-only arena [`Document`].

mod parser;

pub use ariaq_dom::{Document, DomTree, Node, NodeId, NodeRef};
pub use parser::HtmlParser;

/// Parse an HTML string into a Document
///
/// Parsing never fails: html5ever recovers from malformed input the same way
/// a browser does, wrapping fragments in `<html>`/`<head>`/`<body>`.
pub fn parse_html(html: &str) -> Document {
    HtmlParser::new().parse(html)
}
