//! [`Host`] implementation over the in-memory [`Document`].

use super::{Activation, ClickEvent, Document, Node, NodeRef};
use crate::error::HostError;
use crate::host::{Anchor, Host};
use std::cell::RefCell;
use std::rc::Rc;

/// Host backed by an in-memory [`Document`]; clicks go to `A`.
pub struct DocumentHost<A> {
    document: Document,
    activation: Rc<A>,
}

impl<A: Activation> DocumentHost<A> {
    pub fn new(document: Document, activation: A) -> Self {
        Self {
            document,
            activation: Rc::new(activation),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn activation(&self) -> &A {
        &self.activation
    }
}

impl<A: Activation> Host for DocumentHost<A> {
    type Anchor = DocumentAnchor<A>;

    fn create_anchor(&self) -> Result<DocumentAnchor<A>, HostError> {
        if !self.document.has_body() {
            return Err(HostError::NoDocument);
        }
        Ok(DocumentAnchor {
            node: Rc::new(RefCell::new(Node::new("a"))),
            document: self.document.clone(),
            activation: Rc::clone(&self.activation),
        })
    }
}

/// `<a>` element created by a [`DocumentHost`].
pub struct DocumentAnchor<A> {
    node: NodeRef,
    document: Document,
    activation: Rc<A>,
}

impl<A> DocumentAnchor<A> {
    fn set_attribute(&self, name: &str, value: &str) {
        self.node
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }
}

impl<A: Activation> Anchor for DocumentAnchor<A> {
    fn set_download(&self, filename: &str) -> Result<(), HostError> {
        self.set_attribute("download", filename);
        Ok(())
    }

    fn set_href(&self, locator: &str) -> Result<(), HostError> {
        self.set_attribute("href", locator);
        Ok(())
    }

    fn insert(&self) -> Result<(), HostError> {
        self.document.attach(&self.node)
    }

    fn activate(&self) -> Result<(), HostError> {
        // Build the event before dispatch; the handler may inspect the document.
        let event = {
            let node = self.node.borrow();
            ClickEvent {
                download: node.attribute("download").map(str::to_owned),
                href: node.attribute("href").map(str::to_owned),
                connected: self.document.contains(&self.node),
            }
        };
        tracing::trace!(?event, "link activated");
        self.activation.on_click(&event)
    }

    fn remove(&self) -> Result<(), HostError> {
        self.document.detach(&self.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RecordingActivation;
    use crate::trigger;
    use std::cell::Cell;

    fn recording_host() -> DocumentHost<RecordingActivation> {
        DocumentHost::new(Document::new(), RecordingActivation::default())
    }

    #[test]
    fn report_csv_scenario() {
        let host = recording_host();
        trigger(&host, "report.csv", "blob:http://example/abc123").unwrap();

        assert_eq!(host.document().child_count(), 0);
        assert_eq!(
            host.activation().clicks(),
            vec![ClickEvent {
                download: Some("report.csv".into()),
                href: Some("blob:http://example/abc123".into()),
                connected: true,
            }]
        );
    }

    #[test]
    fn empty_filename_scenario() {
        let host = recording_host();
        trigger(&host, "", "blob:http://example/abc123").unwrap();
        let clicks = host.activation().clicks();
        assert_eq!(clicks.len(), 1);
        assert_eq!(clicks[0].download.as_deref(), Some(""));
        assert_eq!(host.document().child_count(), 0);
    }

    #[test]
    fn link_is_in_tree_during_activation() {
        let document = Document::new();
        document.append(Node::new("main")).unwrap();
        let observed = Rc::new(RefCell::new(Vec::new()));

        let doc = document.clone();
        let seen = Rc::clone(&observed);
        let host = DocumentHost::new(
            document.clone(),
            move |_: &ClickEvent| -> Result<(), HostError> {
                seen.borrow_mut().extend(doc.children());
                Ok(())
            },
        );
        trigger(&host, "report.csv", "blob:http://example/abc123").unwrap();

        let observed = observed.borrow();
        assert_eq!(observed.len(), 2);
        assert_eq!(observed[0].tag, "main");
        assert_eq!(observed[1].tag, "a");
        assert_eq!(observed[1].attribute("download"), Some("report.csv"));
        assert_eq!(
            observed[1].attribute("href"),
            Some("blob:http://example/abc123")
        );
        // Pre-existing content is left alone; the link is gone.
        assert_eq!(document.child_count(), 1);
        assert_eq!(document.children()[0].tag, "main");
    }

    #[test]
    fn child_count_unchanged_across_calls() {
        let host = recording_host();
        host.document().append(Node::new("div")).unwrap();
        for name in ["a.bin", "b.bin", "c.bin"] {
            let before = host.document().child_count();
            trigger(&host, name, "blob:http://example/x").unwrap();
            assert_eq!(host.document().child_count(), before);
        }
        assert_eq!(host.activation().clicks().len(), 3);
    }

    #[test]
    fn no_body_fails_without_click() {
        let host = DocumentHost::new(Document::without_body(), RecordingActivation::default());
        let err = trigger(&host, "report.csv", "blob:x").unwrap_err();
        assert!(matches!(err, HostError::NoDocument));
        assert!(host.activation().clicks().is_empty());
    }

    #[test]
    fn activation_error_leaves_link_attached() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let host = DocumentHost::new(
            Document::new(),
            move |_: &ClickEvent| -> Result<(), HostError> {
                counter.set(counter.get() + 1);
                Err(HostError::Js("blocked".into()))
            },
        );
        let err = trigger(&host, "x", "blob:x").unwrap_err();
        assert!(matches!(err, HostError::Js(ref m) if m == "blocked"));
        assert_eq!(calls.get(), 1);
        assert_eq!(host.document().child_count(), 1);
    }

    #[test]
    fn detached_click_reports_not_connected() {
        let host = recording_host();
        let anchor = host.create_anchor().unwrap();
        anchor.set_href("blob:x").unwrap();
        anchor.activate().unwrap();
        let clicks = host.activation().clicks();
        assert!(!clicks[0].connected);
        assert_eq!(clicks[0].download, None);
        assert!(matches!(anchor.remove(), Err(HostError::NotConnected)));
    }
}
