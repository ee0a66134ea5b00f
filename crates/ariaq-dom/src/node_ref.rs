//! Borrowed node handle
//!
//! [`NodeRef`] pairs a [`Document`] borrow with a [`NodeId`]. It is `Copy`,
//! compares by identity, and exposes the read-only surface the accessibility
//! resolvers need: tag, attributes, parent chain, subtree walk and text.

use std::fmt;

use crate::{Document, ElementData, Node, NodeData, NodeId};

/// Read-only view of one node inside a [`Document`]
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    document: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(document: &'a Document, id: NodeId) -> Self {
        Self { document, id }
    }

    /// Arena id of this node
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Owning document. Id references always resolve against the whole
    /// document, never against a subtree.
    #[inline]
    pub fn document(&self) -> &'a Document {
        self.document
    }

    fn node(&self) -> Option<&'a Node> {
        self.document.tree().get(self.id)
    }

    fn link(&self, select: impl Fn(&Node) -> NodeId) -> Option<NodeRef<'a>> {
        let id = select(self.node()?);
        if id.is_valid() {
            self.document.node(id)
        } else {
            None
        }
    }

    /// Element data, if this node is an element
    pub fn element(&self) -> Option<&'a ElementData> {
        self.node()?.as_element()
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        self.element().is_some()
    }

    /// Text of a text node
    pub fn as_text(&self) -> Option<&'a str> {
        self.node()?.as_text()
    }

    /// Lowercase tag name; `None` for non-element nodes
    pub fn tag(&self) -> Option<&'a str> {
        self.element().map(|e| e.name.as_str())
    }

    /// True when this is an element with one of the given tag names
    pub fn has_tag(&self, tags: &[&str]) -> bool {
        self.tag().is_some_and(|t| tags.contains(&t))
    }

    /// Attribute value; `None` when absent or when this is not an element
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element()?.get_attr(name)
    }

    /// Attribute presence, empty values included
    pub fn has_attr(&self, name: &str) -> bool {
        self.element().is_some_and(|e| e.has_attr(name))
    }

    /// All attributes as `(name, value)` pairs in source order
    pub fn attributes(&self) -> impl Iterator<Item = (&'a str, &'a str)> + use<'a> {
        self.element()
            .into_iter()
            .flat_map(|e| e.attrs.iter())
            .map(|a| (a.name.as_str(), a.value.as_str()))
    }

    /// Parent node, which may be the document node
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.link(|n| n.parent)
    }

    /// Parent node if it is an element
    pub fn parent_element(&self) -> Option<NodeRef<'a>> {
        self.parent().filter(|p| p.is_element())
    }

    pub fn first_child(&self) -> Option<NodeRef<'a>> {
        self.link(|n| n.first_child)
    }

    pub fn next_sibling(&self) -> Option<NodeRef<'a>> {
        self.link(|n| n.next_sibling)
    }

    /// Direct children in order
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + use<'a> {
        std::iter::successors(self.first_child(), |n| n.next_sibling())
    }

    /// Strict ancestors, nearest first, ending at the document node
    pub fn ancestors(&self) -> Ancestors<'a> {
        Ancestors {
            next: self.parent(),
        }
    }

    /// Strict descendants in document order (pre-order)
    pub fn descendants(&self) -> Descendants<'a> {
        Descendants {
            document: self.document,
            root: self.id,
            next: self.node().map(|n| n.first_child).filter(|c| c.is_valid()),
        }
    }

    /// First descendant element (document order) satisfying `predicate`
    pub fn find_descendant<P>(&self, mut predicate: P) -> Option<NodeRef<'a>>
    where
        P: FnMut(&NodeRef<'a>) -> bool,
    {
        self.descendants().find(|n| n.is_element() && predicate(n))
    }

    /// Nearest ancestor element with the given tag
    pub fn closest_ancestor(&self, tag: &str) -> Option<NodeRef<'a>> {
        self.ancestors().find(|n| n.tag() == Some(tag))
    }

    /// True if `self` is a strict ancestor of `other` in the same document
    pub fn is_ancestor_of(&self, other: &NodeRef<'_>) -> bool {
        std::ptr::eq(self.document, other.document) && other.ancestors().any(|a| a.id == self.id)
    }

    /// Concatenated text of all descendant text nodes, untrimmed
    pub fn text_content(&self) -> String {
        if let Some(text) = self.as_text() {
            return text.to_string();
        }
        self.descendants().filter_map(|n| n.as_text()).collect()
    }

    /// Deep text content with surrounding whitespace removed
    pub fn text(&self) -> String {
        self.text_content().trim().to_string()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.document, other.document) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node().map(|n| &n.data) {
            Some(NodeData::Element(e)) => {
                write!(f, "<{}", e.name)?;
                for attr in &e.attrs {
                    write!(f, " {}={:?}", attr.name, attr.value)?;
                }
                write!(f, "> #{}", self.id.index())
            }
            Some(NodeData::Text(t)) => write!(f, "#text {:?}", t),
            Some(NodeData::Comment(c)) => write!(f, "<!--{}-->", c),
            Some(NodeData::Doctype { name }) => write!(f, "<!DOCTYPE {}>", name),
            Some(NodeData::Document) => f.write_str("#document"),
            None => write!(f, "#invalid {}", self.id.index()),
        }
    }
}

/// Iterator over strict ancestors, nearest first
pub struct Ancestors<'a> {
    next: Option<NodeRef<'a>>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

/// Pre-order iterator over the strict descendants of a subtree root
pub struct Descendants<'a> {
    document: &'a Document,
    root: NodeId,
    next: Option<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let tree = self.document.tree();
        let node = tree.get(current)?;

        if node.first_child.is_valid() {
            self.next = Some(node.first_child);
        } else {
            // Climb until a node with a next sibling, stopping at the subtree root
            let mut cursor = current;
            while cursor != self.root {
                let Some(n) = tree.get(cursor) else { break };
                if n.next_sibling.is_valid() {
                    self.next = Some(n.next_sibling);
                    break;
                }
                cursor = n.parent;
                if !cursor.is_valid() {
                    break;
                }
            }
        }

        Some(NodeRef::new(self.document, current))
    }
}
