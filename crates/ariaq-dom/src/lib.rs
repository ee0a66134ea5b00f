//! ariaq DOM - Document Object Model
//!
//! Arena-allocated DOM tree. Nodes are addressed by [`NodeId`] and linked
//! through parent/child/sibling ids, so a finished [`Document`] is plain data:
//! `Send + Sync`, never mutated by queries, and safe to share across threads.

mod document;
mod node;
mod node_ref;
mod tree;

pub use document::Document;
pub use node::{Attribute, ElementData, Node, NodeData};
pub use node_ref::{Ancestors, Descendants, NodeRef};
pub use tree::{Children, DomTree};

/// Node identifier (index into the arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The document node. Always present in a [`DomTree`].
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for a missing link.
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena index of this node.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
