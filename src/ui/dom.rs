/// Small helpers over web_sys for element lookup, classes and listeners

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

use crate::config::HIDDEN_CLASS;

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn by_id(doc: &Document, id: &str) -> Option<Element> {
    doc.get_element_by_id(id)
}

/// First element matching `selector` under `root`, treating selector
/// errors as "not found".
pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_document(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`, in document order
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        log::debug!("Invalid selector: {}", selector);
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn is_hidden(el: &Element) -> bool {
    el.class_list().contains(HIDDEN_CLASS)
}

pub fn set_hidden(el: &Element, hidden: bool) {
    let _ = el.class_list().toggle_with_force(HIDDEN_CLASS, hidden);
}

pub fn add_classes(el: &Element, classes: &[String]) {
    let list = el.class_list();
    for class in classes {
        let _ = list.add_1(class);
    }
}

pub fn remove_classes(el: &Element, classes: &[String]) {
    let list = el.class_list();
    for class in classes {
        let _ = list.remove_1(class);
    }
}

/// Attach a page-lifetime event listener
pub fn listen<F>(target: &Element, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("Failed to attach {} listener: {:?}", event, e);
        return;
    }
    closure.forget();
}
