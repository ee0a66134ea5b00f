//! ARIA roles
//!
//! Tokens accepted in `role` attributes and produced by implicit role
//! resolution. Parsing is case-insensitive.

use std::fmt;
use std::str::FromStr;

use crate::A11yError;

/// A role token, explicit or implicit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    // Landmark roles
    Banner,
    Complementary,
    ContentInfo,
    Form,
    Main,
    Navigation,
    Region,

    // Widget roles
    Alert,
    Button,
    Checkbox,
    ComboBox,
    Dialog,
    GridCell,
    Link,
    ListBox,
    Menu,
    Meter,
    Option,
    ProgressBar,
    Radio,
    SearchBox,
    Status,
    TextBox,

    // Document structure
    Article,
    Cell,
    ColumnHeader,
    Definition,
    Document,
    Figure,
    Generic,
    Grid,
    Group,
    Heading,
    Image,
    Img,
    List,
    ListItem,
    Paragraph,
    Presentation,
    Row,
    RowGroup,
    Separator,
    Table,
    Term,
    Time,
    TreeGrid,
}

impl AriaRole {
    /// Every role, in declaration order
    pub const ALL: [AriaRole; 46] = [
        Self::Banner,
        Self::Complementary,
        Self::ContentInfo,
        Self::Form,
        Self::Main,
        Self::Navigation,
        Self::Region,
        Self::Alert,
        Self::Button,
        Self::Checkbox,
        Self::ComboBox,
        Self::Dialog,
        Self::GridCell,
        Self::Link,
        Self::ListBox,
        Self::Menu,
        Self::Meter,
        Self::Option,
        Self::ProgressBar,
        Self::Radio,
        Self::SearchBox,
        Self::Status,
        Self::TextBox,
        Self::Article,
        Self::Cell,
        Self::ColumnHeader,
        Self::Definition,
        Self::Document,
        Self::Figure,
        Self::Generic,
        Self::Grid,
        Self::Group,
        Self::Heading,
        Self::Image,
        Self::Img,
        Self::List,
        Self::ListItem,
        Self::Paragraph,
        Self::Presentation,
        Self::Row,
        Self::RowGroup,
        Self::Separator,
        Self::Table,
        Self::Term,
        Self::Time,
        Self::TreeGrid,
    ];

    /// The role token as written in a `role` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Banner => "banner",
            Self::Complementary => "complementary",
            Self::ContentInfo => "contentinfo",
            Self::Form => "form",
            Self::Main => "main",
            Self::Navigation => "navigation",
            Self::Region => "region",
            Self::Alert => "alert",
            Self::Button => "button",
            Self::Checkbox => "checkbox",
            Self::ComboBox => "combobox",
            Self::Dialog => "dialog",
            Self::GridCell => "gridcell",
            Self::Link => "link",
            Self::ListBox => "listbox",
            Self::Menu => "menu",
            Self::Meter => "meter",
            Self::Option => "option",
            Self::ProgressBar => "progressbar",
            Self::Radio => "radio",
            Self::SearchBox => "searchbox",
            Self::Status => "status",
            Self::TextBox => "textbox",
            Self::Article => "article",
            Self::Cell => "cell",
            Self::ColumnHeader => "columnheader",
            Self::Definition => "definition",
            Self::Document => "document",
            Self::Figure => "figure",
            Self::Generic => "generic",
            Self::Grid => "grid",
            Self::Group => "group",
            Self::Heading => "heading",
            Self::Image => "image",
            Self::Img => "img",
            Self::List => "list",
            Self::ListItem => "listitem",
            Self::Paragraph => "paragraph",
            Self::Presentation => "presentation",
            Self::Row => "row",
            Self::RowGroup => "rowgroup",
            Self::Separator => "separator",
            Self::Table => "table",
            Self::Term => "term",
            Self::Time => "time",
            Self::TreeGrid => "treegrid",
        }
    }

    /// Case-insensitive match against a role token
    pub fn is(&self, token: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(token.trim())
    }

    /// Roles whose presence turns a nested `<footer>` into a generic container
    pub fn scopes_footer(&self) -> bool {
        matches!(
            self,
            Self::Article | Self::Complementary | Self::Main | Self::Navigation | Self::Region
        )
    }
}

impl FromStr for AriaRole {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.is(s))
            .ok_or_else(|| A11yError::UnknownRole(s.to_string()))
    }
}

impl fmt::Display for AriaRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
