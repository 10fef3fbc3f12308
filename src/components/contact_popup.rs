//! Floating contact widget binding.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use storefront_core::{ContactPopup, PopupView};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlAudioElement, HtmlElement};

use super::Listeners;
use crate::dom::{by_id, event_within, set_class};
use crate::selectors::{BADGE_CLASS, CONTACT_BUTTON_ID, CONTACT_CLOSE_ID, CONTACT_POPUP_ID};

/// Notification sound. Autoplay rejections are swallowed.
struct Chime {
    audio: HtmlAudioElement,
    on_reject: Closure<dyn FnMut(JsValue)>,
}

impl Chime {
    fn load(src: &str) -> Option<Self> {
        let audio = HtmlAudioElement::new_with_src(src).ok()?;
        let on_reject = Closure::<dyn FnMut(JsValue)>::new(|err: JsValue| {
            tracing::debug!(error = ?err, "Chime playback rejected");
        });
        Some(Self { audio, on_reject })
    }

    fn play(&self) {
        self.audio.set_current_time(0.0);
        match self.audio.play() {
            Ok(playing) => {
                let _ = playing.catch(&self.on_reject);
            }
            Err(e) => tracing::debug!(error = ?e, "Chime playback failed"),
        }
    }
}

struct Widget {
    button: Element,
    panel: HtmlElement,
    chime: Option<Chime>,
}

impl PopupView for Widget {
    fn set_badge(&self, visible: bool) {
        set_class(&self.button, BADGE_CLASS, visible);
    }

    fn set_open(&self, open: bool) {
        let display = if open { "block" } else { "none" };
        if let Err(e) = self.panel.style().set_property("display", display) {
            tracing::debug!(error = ?e, "Could not toggle contact popup");
        }
    }

    fn play_chime(&self) {
        if let Some(chime) = &self.chime {
            chime.play();
        }
    }
}

pub fn mount(document: &Document, chime_src: Option<&str>) -> Option<Listeners> {
    let button = by_id(document, CONTACT_BUTTON_ID)?;
    let panel = by_id(document, CONTACT_POPUP_ID)?.dyn_into::<HtmlElement>().ok()?;
    let close = by_id(document, CONTACT_CLOSE_ID)?;

    let chime = chime_src.and_then(Chime::load);
    let popup = Rc::new(RefCell::new(ContactPopup::new(Widget {
        button: button.clone(),
        panel: panel.clone(),
        chime,
    })));

    let on_button = {
        let popup = Rc::clone(&popup);
        EventListener::new(&button, "click", move |event| {
            event.stop_propagation();
            popup.borrow_mut().toggle();
        })
    };

    let on_close = {
        let popup = Rc::clone(&popup);
        EventListener::new(&close, "click", move |event| {
            event.stop_propagation();
            popup.borrow_mut().close();
        })
    };

    let on_outside = EventListener::new(document, "click", move |event| {
        let inside = event_within(event, &[&panel, &button]);
        popup.borrow_mut().on_document_click(inside);
    });

    Some(vec![on_button, on_close, on_outside])
}
