//! Browser Host Document

use antenna_mount::HostDocument;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// [`HostDocument`] backed by the page's `web_sys::Document`
#[derive(Clone, Debug)]
pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the current window, if running in a browser
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }
}

impl HostDocument for BrowserDocument {
    type Node = HtmlElement;

    /// Elements that are not HTML elements (e.g. inline SVG) cannot host the
    /// view and resolve to `None`.
    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        let element = self.document.get_element_by_id(id)?;
        match element.dyn_into::<HtmlElement>() {
            Ok(element) => Some(element),
            Err(_) => {
                tracing::warn!(id, "Element is not an HTML element; cannot mount into it");
                None
            }
        }
    }
}
