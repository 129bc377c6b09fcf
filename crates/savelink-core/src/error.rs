//! Errors raised by hosts while creating, wiring, activating or removing the
//! transient download link.

/// Failure reported by a host environment.
///
/// The trigger never inspects or recovers from these; they reach the caller
/// exactly as the host produced them.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// There is no document tree (or no body) to attach the link to.
    #[error("no document available to host the download link")]
    NoDocument,

    /// The element was removed while it was not part of the document tree.
    #[error("element is not attached to the document")]
    NotConnected,

    /// The element was inserted twice without being removed in between.
    #[error("element is already attached to the document")]
    AlreadyConnected,

    /// The host cannot resolve locators with this scheme (e.g. `blob:` outside a browser).
    #[error("unsupported resource locator scheme `{0}`")]
    UnsupportedLocator(String),

    /// The locator could not be parsed or decoded.
    #[error("invalid resource locator {locator:?}: {reason}")]
    InvalidLocator { locator: String, reason: String },

    /// Transfer failed (connection, timeout, TLS, ...).
    #[cfg(not(target_arch = "wasm32"))]
    #[error("transfer failed: {0}")]
    Fetch(#[from] curl::Error),

    /// Remote answered with a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),

    /// The resource is larger than the configured cap.
    #[error("resource exceeds the {limit} byte limit")]
    TooLarge { limit: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Exception thrown by the JavaScript host.
    #[error("javascript host error: {0}")]
    Js(String),
}

#[cfg(not(target_arch = "wasm32"))]
impl HostError {
    pub(crate) fn invalid_locator(locator: &str, reason: impl Into<String>) -> Self {
        HostError::InvalidLocator {
            locator: locator.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            HostError::NoDocument.to_string(),
            "no document available to host the download link"
        );
        assert_eq!(HostError::Http(404).to_string(), "HTTP 404");
        assert_eq!(
            HostError::UnsupportedLocator("blob".into()).to_string(),
            "unsupported resource locator scheme `blob`"
        );
        assert_eq!(
            HostError::invalid_locator("data:abc", "missing `,`").to_string(),
            "invalid resource locator \"data:abc\": missing `,`"
        );
    }

    #[test]
    fn io_error_converts() {
        let err: HostError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, HostError::Io(_)));
    }
}
