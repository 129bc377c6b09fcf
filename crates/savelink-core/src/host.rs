//! Capabilities a host environment must provide for the download trigger.

use crate::error::HostError;

/// A host environment able to create link elements.
///
/// Passed explicitly to [`crate::trigger`] instead of reaching for a global
/// document, so the same trigger runs against the browser DOM, an in-memory
/// document or a native save-to-directory host.
pub trait Host {
    /// Opaque handle to a created link element.
    type Anchor: Anchor;

    /// Create a new, detached link element.
    fn create_anchor(&self) -> Result<Self::Anchor, HostError>;
}

/// Operations available on a link element created by a [`Host`].
pub trait Anchor {
    /// Set the suggested filename (`download` attribute).
    fn set_download(&self, filename: &str) -> Result<(), HostError>;

    /// Set the link target (`href` attribute).
    fn set_href(&self, locator: &str) -> Result<(), HostError>;

    /// Attach the element to the visible document tree.
    fn insert(&self) -> Result<(), HostError>;

    /// Primary activation, i.e. a simulated click.
    fn activate(&self) -> Result<(), HostError>;

    /// Detach the element from the document tree.
    fn remove(&self) -> Result<(), HostError>;
}
