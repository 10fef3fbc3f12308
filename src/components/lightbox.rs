//! Image lightbox binding.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use storefront_core::{ImagePreview, PreviewView};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, KeyboardEvent};

use super::Listeners;
use crate::dom::{query, query_all, set_class};
use crate::selectors::{
    PREVIEW_CLOSE, PREVIEW_IMAGE, PREVIEW_OPEN_CLASS, PREVIEW_OVERLAY, PREVIEW_SRC_ATTR,
    PREVIEW_TRIGGERS,
};

struct Overlay {
    overlay: Element,
    image: Element,
}

impl PreviewView for Overlay {
    fn show(&self, src: &str) {
        if let Err(e) = self.image.set_attribute("src", src) {
            tracing::warn!(error = ?e, "Could not load preview image");
        }
        set_class(&self.overlay, PREVIEW_OPEN_CLASS, true);
    }

    fn hide(&self) {
        set_class(&self.overlay, PREVIEW_OPEN_CLASS, false);
    }
}

pub fn mount(document: &Document) -> Option<Listeners> {
    let overlay = query(document, PREVIEW_OVERLAY)?;
    let image = query(document, PREVIEW_IMAGE)?;
    let close = query(document, PREVIEW_CLOSE);

    let preview = Rc::new(RefCell::new(ImagePreview::new(Overlay {
        overlay: overlay.clone(),
        image,
    })));
    let mut listeners = Vec::new();

    let triggers = query_all(document, PREVIEW_TRIGGERS);
    for trigger in &triggers {
        if let Some(html) = trigger.dyn_ref::<HtmlElement>() {
            if let Err(e) = html.style().set_property("cursor", "zoom-in") {
                tracing::debug!(error = ?e, "Could not set preview cursor");
            }
        }
        let preview = Rc::clone(&preview);
        let source = trigger.clone();
        listeners.push(EventListener::new(trigger, "click", move |_| {
            let override_src = source.get_attribute(PREVIEW_SRC_ATTR);
            let src = source.get_attribute("src");
            preview
                .borrow_mut()
                .open_trigger(override_src.as_deref(), src.as_deref());
        }));
    }

    {
        let preview = Rc::clone(&preview);
        let backdrop = overlay.clone();
        listeners.push(EventListener::new(&overlay, "click", move |event| {
            let backdrop: &EventTarget = backdrop.as_ref();
            let on_backdrop = event.target().as_ref() == Some(backdrop);
            preview.borrow_mut().on_overlay_click(on_backdrop);
        }));
    }

    if let Some(close) = close {
        let preview = Rc::clone(&preview);
        listeners.push(EventListener::new(&close, "click", move |_| {
            preview.borrow_mut().close();
        }));
    }

    listeners.push(EventListener::new(document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
            preview.borrow_mut().on_key(&key);
        }
    }));

    tracing::debug!(triggers = triggers.len(), "Lightbox mounted");
    Some(listeners)
}
