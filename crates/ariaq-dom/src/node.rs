//! DOM Node - arena representation
//!
//! Links are stored as [`NodeId`]s rather than pointers; [`NodeId::NONE`]
//! marks a missing parent, child, or sibling.

use crate::NodeId;

/// One arena slot: tree links plus payload
#[derive(Debug, Clone)]
pub struct Node {
    /// `NONE` for the document node and detached nodes
    pub parent: NodeId,
    pub first_child: NodeId,
    /// Kept so appends never walk the sibling chain
    pub last_child: NodeId,
    pub prev_sibling: NodeId,
    pub next_sibling: NodeId,
    pub data: NodeData,
}

impl Node {
    fn detached(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node. The tag name is stored lowercased.
    pub fn element(name: &str) -> Self {
        Self::detached(NodeData::Element(ElementData::new(name)))
    }

    /// Text node holding `content` verbatim
    pub fn text(content: impl Into<String>) -> Self {
        Self::detached(NodeData::Text(content.into()))
    }

    pub fn comment(content: impl Into<String>) -> Self {
        Self::detached(NodeData::Comment(content.into()))
    }

    pub fn doctype(name: impl Into<String>) -> Self {
        Self::detached(NodeData::Doctype { name: name.into() })
    }

    /// The single root of a [`DomTree`](crate::DomTree)
    pub fn document() -> Self {
        Self::detached(NodeData::Document)
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Mutable element payload, used while building the tree
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Payload of a [`Node`]
#[derive(Debug, Clone)]
pub enum NodeData {
    Document,
    Doctype { name: String },
    Element(ElementData),
    /// Raw text, whitespace included
    Text(String),
    Comment(String),
}

/// Element-specific data
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Lowercase local name
    pub name: String,
    /// Attributes in source order
    pub attrs: Vec<Attribute>,
}

impl ElementData {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            attrs: Vec::new(),
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Check attribute presence (empty values count as present)
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Set an attribute, replacing an existing value
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(attr) = self.attrs.iter_mut().find(|a| a.name == name) {
            attr.value = value;
            return;
        }
        self.attrs.push(Attribute {
            name: name.to_string(),
            value,
        });
    }

    /// The `id` attribute
    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_name_lowercased() {
        let node = Node::element("DIV");
        assert_eq!(node.as_element().unwrap().name, "div");
        assert!(node.is_element());
        assert!(node.as_text().is_none());
    }

    #[test]
    fn test_set_attr_replaces() {
        let mut elem = ElementData::new("input");
        elem.set_attr("type", "text");
        elem.set_attr("type", "search");
        elem.set_attr("disabled", "");

        assert_eq!(elem.attrs.len(), 2);
        assert_eq!(elem.get_attr("type"), Some("search"));
        assert!(elem.has_attr("disabled"));
        assert_eq!(elem.get_attr("disabled"), Some(""));
        assert!(!elem.has_attr("id"));
    }
}
