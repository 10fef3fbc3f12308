//! Thin helpers over `web-sys` shared by the feature bindings.

use storefront_core::{KeyValueStore, StorefrontError, StorefrontResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Node, Storage,
};

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_within(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

pub fn dom_error(context: &str, value: JsValue) -> StorefrontError {
    StorefrontError::Dom(format!("{context}: {value:?}"))
}

/// Narrow an element to a concrete HTML type.
pub fn cast<T: JsCast>(element: Element, what: &str) -> StorefrontResult<T> {
    element
        .dyn_into::<T>()
        .map_err(|_| StorefrontError::Dom(format!("{what} has an unexpected element type")))
}

/// Rendered text of an element, falling back to its raw text content.
pub fn visible_text(element: &Element) -> String {
    match element.dyn_ref::<HtmlElement>() {
        Some(html) => html.inner_text(),
        None => element.text_content().unwrap_or_default(),
    }
}

/// Current value of a form control, whatever kind of control it is.
pub fn control_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Value of the named control inside `form`, or empty when absent.
pub fn field_value(form: &Element, name: &str) -> String {
    query_within(form, &format!("[name=\"{name}\"]"))
        .map(|field| control_value(&field))
        .unwrap_or_default()
}

/// Whether the event started inside any of `containers`.
pub fn event_within(event: &Event, containers: &[&Element]) -> bool {
    let Some(target) = event.target() else {
        return false;
    };
    let Some(node) = target.dyn_ref::<Node>() else {
        return false;
    };
    containers.iter().any(|c| c.contains(Some(node)))
}

pub fn set_displayed(element: &HtmlElement, shown: bool) {
    let style = element.style();
    let result = if shown {
        style.remove_property("display").map(|_| ())
    } else {
        style.set_property("display", "none")
    };
    if let Err(e) = result {
        tracing::debug!(error = ?e, "Could not change element display");
    }
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        tracing::debug!(error = ?e, class, "Could not change element class");
    }
}

/// `localStorage`, when the browser grants access to it.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// `None` when storage is disabled (privacy modes, sandboxed frames).
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> StorefrontResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorefrontError::Storage(format!("{key}: {e:?}")))
    }
}
