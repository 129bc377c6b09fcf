//! The download trigger: create a link, click it, take it away again.

use crate::error::HostError;
use crate::host::{Anchor, Host};

/// Ask `host` to save the resource at `resource_locator` under the suggested
/// name `filename`.
///
/// Creates a link element, sets its `download` and `href` attributes, inserts
/// it into the document, activates it once and removes it again, all within
/// this call. Neither argument is validated: an empty filename is passed on
/// as is, and the locator's lifetime (e.g. revoking an object URL) stays with
/// the caller.
///
/// Any host failure is returned unchanged. There is no cleanup on failure; if
/// activation fails the element stays where the host left it.
///
/// # Examples
///
/// ```
/// use savelink_core::document::{Document, DocumentHost, RecordingActivation};
///
/// let host = DocumentHost::new(Document::new(), RecordingActivation::default());
/// savelink_core::trigger(&host, "report.csv", "blob:http://example/abc123").unwrap();
/// assert_eq!(host.document().child_count(), 0);
/// assert_eq!(host.activation().clicks().len(), 1);
/// ```
pub fn trigger<H: Host + ?Sized>(
    host: &H,
    filename: &str,
    resource_locator: &str,
) -> Result<(), HostError> {
    tracing::debug!(filename, resource_locator, "triggering download");

    let anchor = host.create_anchor()?;
    anchor.set_download(filename)?;
    anchor.set_href(resource_locator)?;
    anchor.insert()?;
    anchor.activate()?;
    anchor.remove()?;

    tracing::debug!(filename, "download link activated and removed");
    Ok(())
}
