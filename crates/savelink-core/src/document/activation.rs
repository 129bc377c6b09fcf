//! What happens when a link in the in-memory document is clicked.

use crate::error::HostError;
use std::cell::RefCell;

/// State of the link at the moment it was activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    /// `download` attribute (suggested filename), if set.
    pub download: Option<String>,
    /// `href` attribute (resource locator), if set.
    pub href: Option<String>,
    /// Whether the link was attached to the document when clicked.
    pub connected: bool,
}

/// Default action of a link click; the "browser" behind the document.
pub trait Activation {
    fn on_click(&self, event: &ClickEvent) -> Result<(), HostError>;
}

impl<F> Activation for F
where
    F: Fn(&ClickEvent) -> Result<(), HostError>,
{
    fn on_click(&self, event: &ClickEvent) -> Result<(), HostError> {
        self(event)
    }
}

/// Records every click and does nothing else.
#[derive(Debug, Default)]
pub struct RecordingActivation {
    clicks: RefCell<Vec<ClickEvent>>,
}

impl RecordingActivation {
    pub fn clicks(&self) -> Vec<ClickEvent> {
        self.clicks.borrow().clone()
    }
}

impl Activation for RecordingActivation {
    fn on_click(&self, event: &ClickEvent) -> Result<(), HostError> {
        self.clicks.borrow_mut().push(event.clone());
        Ok(())
    }
}
