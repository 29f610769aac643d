//! DOM Helpers
//!
//! Thin wrappers over web-sys lookups and event wiring. Lookups return
//! Option so a missing element skips its enhancement instead of aborting
//! the rest of page setup.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

/// File name of the page currently loaded, e.g. "service.html"
pub fn current_page() -> Option<String> {
    let path = window()?.location().pathname().ok()?;
    Some(page_name(&path).to_string())
}

/// Last segment of a path ("" for a bare directory path)
pub fn page_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// First element matching a selector
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Element with the given id
pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// All elements matching a selector
pub fn query_all(selector: &str) -> Vec<Element> {
    let mut found = Vec::new();
    let Some(doc) = document() else { return found };
    let Ok(list) = doc.query_selector_all(selector) else { return found };
    for index in 0..list.length() {
        if let Some(el) = list.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            found.push(el);
        }
    }
    found
}

/// Attach an event listener for the lifetime of the page
pub fn listen<T>(target: &T, event: &str, handler: impl FnMut(web_sys::Event) + 'static)
where
    T: AsRef<EventTarget>,
{
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let _ = target
        .as_ref()
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    callback.forget();
}

/// Set one inline style property, ignoring non-HTML elements
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}
