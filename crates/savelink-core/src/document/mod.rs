//! In-memory document tree.
//!
//! A small stand-in for a browser document: a body holding a flat list of
//! element nodes. [`DocumentHost`] builds on it to implement [`crate::Host`]
//! without a browser, and the native directory host reuses it so the same
//! insert/click/remove sequence runs everywhere.

mod activation;
mod host;

pub use activation::{Activation, ClickEvent, RecordingActivation};
pub use host::{DocumentAnchor, DocumentHost};

use crate::error::HostError;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// An element: tag name plus attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

pub(crate) type NodeRef = Rc<RefCell<Node>>;

#[derive(Debug, Default)]
struct Tree {
    /// `None` models a document without a body (e.g. no document context).
    body: Option<Vec<NodeRef>>,
}

/// Shared handle to an in-memory document. Clones refer to the same tree.
#[derive(Debug, Clone)]
pub struct Document {
    tree: Rc<RefCell<Tree>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A document with an empty body.
    pub fn new() -> Self {
        Self {
            tree: Rc::new(RefCell::new(Tree {
                body: Some(Vec::new()),
            })),
        }
    }

    /// A document with no body; every host operation on it fails with
    /// [`HostError::NoDocument`].
    pub fn without_body() -> Self {
        Self {
            tree: Rc::new(RefCell::new(Tree::default())),
        }
    }

    pub fn has_body(&self) -> bool {
        self.tree.borrow().body.is_some()
    }

    /// Number of nodes currently in the body (0 when there is no body).
    pub fn child_count(&self) -> usize {
        self.tree.borrow().body.as_ref().map_or(0, Vec::len)
    }

    /// Snapshot of the body's nodes, in document order.
    pub fn children(&self) -> Vec<Node> {
        self.tree
            .borrow()
            .body
            .iter()
            .flatten()
            .map(|n| n.borrow().clone())
            .collect()
    }

    /// Append a pre-built node to the body (page content that is not ours).
    pub fn append(&self, node: Node) -> Result<(), HostError> {
        self.attach(&Rc::new(RefCell::new(node)))
    }

    pub(crate) fn attach(&self, node: &NodeRef) -> Result<(), HostError> {
        let mut tree = self.tree.borrow_mut();
        let body = tree.body.as_mut().ok_or(HostError::NoDocument)?;
        if body.iter().any(|n| Rc::ptr_eq(n, node)) {
            return Err(HostError::AlreadyConnected);
        }
        body.push(Rc::clone(node));
        Ok(())
    }

    pub(crate) fn detach(&self, node: &NodeRef) -> Result<(), HostError> {
        let mut tree = self.tree.borrow_mut();
        let body = tree.body.as_mut().ok_or(HostError::NoDocument)?;
        let idx = body
            .iter()
            .position(|n| Rc::ptr_eq(n, node))
            .ok_or(HostError::NotConnected)?;
        body.remove(idx);
        Ok(())
    }

    pub(crate) fn contains(&self, node: &NodeRef) -> bool {
        self.tree
            .borrow()
            .body
            .iter()
            .flatten()
            .any(|n| Rc::ptr_eq(n, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_and_snapshot() {
        let doc = Document::new();
        doc.append(Node::new("p").with_attribute("id", "intro")).unwrap();
        doc.append(Node::new("div")).unwrap();
        assert_eq!(doc.child_count(), 2);
        let children = doc.children();
        assert_eq!(children[0].tag, "p");
        assert_eq!(children[0].attribute("id"), Some("intro"));
        assert_eq!(children[1].tag, "div");
    }

    #[test]
    fn clones_share_the_tree() {
        let doc = Document::new();
        let other = doc.clone();
        other.append(Node::new("span")).unwrap();
        assert_eq!(doc.child_count(), 1);
    }

    #[test]
    fn without_body_rejects_mutation() {
        let doc = Document::without_body();
        assert!(!doc.has_body());
        assert_eq!(doc.child_count(), 0);
        assert!(matches!(
            doc.append(Node::new("a")),
            Err(HostError::NoDocument)
        ));
    }

    #[test]
    fn attach_twice_and_detach_missing() {
        let doc = Document::new();
        let node: NodeRef = Rc::new(RefCell::new(Node::new("a")));
        doc.attach(&node).unwrap();
        assert!(doc.contains(&node));
        assert!(matches!(doc.attach(&node), Err(HostError::AlreadyConnected)));
        doc.detach(&node).unwrap();
        assert!(!doc.contains(&node));
        assert!(matches!(doc.detach(&node), Err(HostError::NotConnected)));
    }
}
