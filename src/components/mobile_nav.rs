//! Mobile menu binding.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use storefront_core::{MobileNav, NavView};
use web_sys::{Document, Element};

use super::Listeners;
use crate::dom::{by_id, event_within, set_class};
use crate::selectors::{NAV_MENU_ID, NAV_OPEN_CLASS, NAV_TOGGLE_ID};

struct Menu(Element);

impl NavView for Menu {
    fn set_open(&self, open: bool) {
        set_class(&self.0, NAV_OPEN_CLASS, open);
    }
}

pub fn mount(document: &Document) -> Option<Listeners> {
    let toggle = by_id(document, NAV_TOGGLE_ID)?;
    let menu = by_id(document, NAV_MENU_ID)?;

    let nav = Rc::new(RefCell::new(MobileNav::new(Menu(menu.clone()))));

    let on_toggle = {
        let nav = Rc::clone(&nav);
        EventListener::new(&toggle, "click", move |event| {
            event.stop_propagation();
            nav.borrow_mut().toggle();
        })
    };

    let button = toggle.clone();
    let on_outside = EventListener::new(document, "click", move |event| {
        let inside = event_within(event, &[&menu, &button]);
        nav.borrow_mut().on_document_click(inside);
    });

    Some(vec![on_toggle, on_outside])
}
