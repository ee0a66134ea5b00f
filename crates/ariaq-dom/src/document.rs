//! Document - High-level document API

use crate::{DomTree, NodeId, NodeRef};

/// HTML Document
///
/// Owns the arena tree and caches the `<html>`, `<head>` and `<body>`
/// elements. Queries only ever borrow it.
#[derive(Debug, Clone)]
pub struct Document {
    tree: DomTree,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
}

impl Document {
    /// Wrap a built tree and locate its structural elements
    pub fn from_tree(tree: DomTree) -> Self {
        let mut document = Self {
            tree,
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        };
        document.finalize();
        document
    }

    /// Create an empty document (document node only)
    pub fn empty() -> Self {
        Self::from_tree(DomTree::new())
    }

    /// Refresh the cached `<html>`, `<head>` and `<body>` ids
    pub fn finalize(&mut self) {
        let root = self.tree.root();
        self.html_element = self.child_element(root, "html");
        self.head_element = self.child_element(self.html_element, "head");
        self.body_element = self.child_element(self.html_element, "body");

        tracing::trace!(
            "Document finalized: {} nodes, html={:?} body={:?}",
            self.tree.len(),
            self.html_element,
            self.body_element
        );
    }

    fn child_element(&self, parent: NodeId, tag: &str) -> NodeId {
        if !parent.is_valid() {
            return NodeId::NONE;
        }
        self.tree
            .children(parent)
            .find(|(_, node)| node.as_element().is_some_and(|e| e.name == tag))
            .map_or(NodeId::NONE, |(id, _)| id)
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// The document node
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, self.tree.root())
    }

    /// View of an arbitrary node
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.tree.get(id).map(|_| NodeRef::new(self, id))
    }

    /// `<html>` element
    pub fn document_element(&self) -> Option<NodeRef<'_>> {
        self.node(self.html_element)
    }

    /// `<head>` element
    pub fn head(&self) -> Option<NodeRef<'_>> {
        self.node(self.head_element)
    }

    /// `<body>` element
    pub fn body(&self) -> Option<NodeRef<'_>> {
        self.node(self.body_element)
    }

    /// Every element in document order
    pub fn elements(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.root().descendants().filter(|n| n.is_element())
    }

    /// First element in document order satisfying `predicate`
    pub fn find_element<P>(&self, predicate: P) -> Option<NodeRef<'_>>
    where
        P: FnMut(&NodeRef<'_>) -> bool,
    {
        self.elements().find(predicate)
    }

    /// First element carrying `id="<id>"`. Empty ids never match.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeRef<'_>> {
        if id.is_empty() {
            return None;
        }
        self.find_element(|n| n.attr("id") == Some(id))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}
