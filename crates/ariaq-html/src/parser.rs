//! html5ever front end
//!
//! The RcDom built by html5ever is walked once and copied into the arena DOM.
//! Text nodes are kept verbatim (whitespace included) so deep text
//! extraction sees exactly what the markup contains.

use ariaq_dom::{Document, DomTree, NodeId};
use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

/// Markup to [`Document`] converter
#[derive(Debug, Clone, Copy)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse markup into a read-only [`Document`]
    pub fn parse(&self, html: &str) -> Document {
        tracing::debug!("Parsing HTML document ({} bytes)", html.len());

        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);

        let mut tree = DomTree::new();
        self.convert(&dom.document, &mut tree);

        let document = Document::from_tree(tree);
        tracing::debug!("Built document with {} nodes", document.tree().len());
        document
    }

    /// Copy the RcDom subtree under `document` into the arena
    ///
    /// Uses an explicit stack so nesting depth is bounded by the heap, not the
    /// call stack. Children are pushed in reverse so siblings pop in order.
    fn convert(&self, document: &Handle, tree: &mut DomTree) {
        let mut pending: Vec<(Handle, NodeId)> = Vec::new();
        push_children(&mut pending, document, tree.root());

        while let Some((handle, parent)) = pending.pop() {
            let id = match &handle.data {
                RcNodeData::Document => {
                    push_children(&mut pending, &handle, parent);
                    continue;
                }
                RcNodeData::Doctype { name, .. } => tree.create_doctype(name),
                RcNodeData::Text { contents } => tree.create_text(&contents.borrow()),
                RcNodeData::Comment { contents } => tree.create_comment(contents),
                RcNodeData::Element { name, attrs, .. } => {
                    let id = tree.create_element(&name.local);
                    if let Some(elem) = tree.get_mut(id).and_then(|n| n.as_element_mut()) {
                        for attr in attrs.borrow().iter() {
                            elem.set_attr(&attr.name.local, attr.value.to_string());
                        }
                    }
                    push_children(&mut pending, &handle, id);
                    id
                }
                // Not part of the HTML accessibility surface
                RcNodeData::ProcessingInstruction { .. } => continue,
            };
            tree.append_child(parent, id);
        }
    }
}

fn push_children(pending: &mut Vec<(Handle, NodeId)>, handle: &Handle, parent: NodeId) {
    pending.extend(handle.children.borrow().iter().rev().map(|child| (child.clone(), parent)));
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}
