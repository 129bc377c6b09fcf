//! Browser host over `web-sys`.
//!
//! [`WebHost`] creates real `<a>` elements in a DOM document, appends them to
//! `document.body`, clicks them and removes them. [`download_object_url`] is
//! exported to JavaScript as `downloadObjectUrl(filename, objectUrl)`.

mod object_url;

pub use object_url::ObjectUrl;

use crate::error::HostError;
use crate::host::{Anchor, Host};
use crate::trigger;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAnchorElement};

/// Host backed by a DOM [`Document`].
#[derive(Debug, Clone)]
pub struct WebHost {
    document: Document,
}

impl WebHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The current window's document; fails outside a browser main thread
    /// (e.g. in a worker, where there is no `window`).
    pub fn from_window() -> Result<Self, HostError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(HostError::NoDocument)?;
        Ok(Self::new(document))
    }
}

impl Host for WebHost {
    type Anchor = WebAnchor;

    fn create_anchor(&self) -> Result<WebAnchor, HostError> {
        let element = self
            .document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| HostError::Js("created element is not an <a>".to_string()))?;
        Ok(WebAnchor {
            element,
            document: self.document.clone(),
        })
    }
}

/// `<a>` element created by a [`WebHost`].
#[derive(Debug, Clone)]
pub struct WebAnchor {
    element: HtmlAnchorElement,
    document: Document,
}

impl Anchor for WebAnchor {
    fn set_download(&self, filename: &str) -> Result<(), HostError> {
        self.element.set_download(filename);
        Ok(())
    }

    fn set_href(&self, locator: &str) -> Result<(), HostError> {
        self.element.set_href(locator);
        Ok(())
    }

    fn insert(&self) -> Result<(), HostError> {
        let body = self.document.body().ok_or(HostError::NoDocument)?;
        body.append_child(&self.element).map_err(js_error)?;
        Ok(())
    }

    fn activate(&self) -> Result<(), HostError> {
        self.element.click();
        Ok(())
    }

    fn remove(&self) -> Result<(), HostError> {
        self.element.remove();
        Ok(())
    }
}

/// Converts a thrown JavaScript value into a [`HostError`], keeping its message.
pub(crate) fn js_error(value: JsValue) -> HostError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"));
    HostError::Js(message)
}

/// `downloadObjectUrl(filename, objectUrl)`: save `object_url` as `filename`
/// using the current window's document. Throws on failure.
#[wasm_bindgen(js_name = downloadObjectUrl)]
pub fn download_object_url(filename: &str, object_url: &str) -> Result<(), JsValue> {
    let host = WebHost::from_window().map_err(to_js)?;
    trigger(&host, filename, object_url).map_err(to_js)
}

fn to_js(err: HostError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
