//! Guarded DOM lookups shared by both components.
//!
//! Every helper returns `Option`; a missing window, document, or element
//! degrades to a no-op at the call site instead of a panic.

use web_sys::{Document, Element, HtmlElement, Window};

#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

#[must_use]
pub fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

#[must_use]
pub fn by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}
