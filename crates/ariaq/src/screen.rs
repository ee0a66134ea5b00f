//! Document-bound query surface

use ariaq_dom::Document;

use crate::config::Config;
use crate::error::Result;
use crate::found::Found;
use crate::matchers::{RoleQuery, TextMatch};
use crate::queries;

/// A parsed document plus the [`Config`] its text queries run with
///
/// ```
/// use ariaq::{Config, Screen, parse_html};
///
/// let doc = parse_html("<button>Save draft</button>");
/// let screen = Screen::with_config(&doc, Config { exact: false });
/// assert!(screen.get_by_text("save").is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Screen<'d> {
    document: &'d Document,
    config: Config,
}

impl<'d> Screen<'d> {
    pub fn new(document: &'d Document) -> Self {
        Self::with_config(document, Config::default())
    }

    pub fn with_config(document: &'d Document, config: Config) -> Self {
        Self { document, config }
    }

    pub fn document(&self) -> &'d Document {
        self.document
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn text_match(&self, text: &str) -> TextMatch {
        TextMatch::new(text, self.config.exact)
    }

    pub fn query_by_label_text(&self, text: &str) -> Result<Option<Found<'d>>> {
        queries::query_by_label_text(self.document, self.text_match(text))
    }

    pub fn get_by_label_text(&self, text: &str) -> Result<Found<'d>> {
        queries::get_by_label_text(self.document, self.text_match(text))
    }

    pub fn query_by_text(&self, text: &str) -> Result<Option<Found<'d>>> {
        queries::query_by_text(self.document, self.text_match(text))
    }

    pub fn get_by_text(&self, text: &str) -> Result<Found<'d>> {
        queries::get_by_text(self.document, self.text_match(text))
    }

    pub fn query_by_role(&self, query: impl Into<RoleQuery>) -> Result<Option<Found<'d>>> {
        queries::query_by_role(self.document, query)
    }

    pub fn get_by_role(&self, query: impl Into<RoleQuery>) -> Result<Found<'d>> {
        queries::get_by_role(self.document, query)
    }

    pub fn query_all_by_role(&self, query: impl Into<RoleQuery>) -> Vec<Found<'d>> {
        queries::query_all_by_role(self.document, query)
    }

    pub fn get_all_by_role(&self, query: impl Into<RoleQuery>) -> Result<Vec<Found<'d>>> {
        queries::get_all_by_role(self.document, query)
    }
}
