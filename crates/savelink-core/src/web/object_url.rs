//! Object URLs for in-memory bytes.
//!
//! Creating and revoking the URL is the caller's job, separate from the
//! trigger. Revoke only once the browser has picked the download up.

use super::js_error;
use crate::error::HostError;
use web_sys::{Blob, BlobPropertyBag, Url};

/// A `blob:` URL for a byte buffer. Revoked by [`ObjectUrl::revoke`] or on drop.
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
    revoked: bool,
}

impl ObjectUrl {
    /// Copies `bytes` into a `Blob` of type `mime` and returns its URL.
    pub fn from_bytes(bytes: &[u8], mime: &str) -> Result<Self, HostError> {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = BlobPropertyBag::new();
        options.set_type(mime);
        let blob =
            Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;
        Ok(Self {
            url,
            revoked: false,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Releases the underlying blob.
    pub fn revoke(mut self) -> Result<(), HostError> {
        self.revoked = true;
        Url::revoke_object_url(&self.url).map_err(js_error)
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if !self.revoked {
            let _ = Url::revoke_object_url(&self.url);
        }
    }
}
