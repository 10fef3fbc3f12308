//! Catalog search and price filter binding.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use storefront_core::{CatalogFilter, ExclusionSet, ItemCard, PriceBracket};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::Listeners;
use crate::dom::{control_value, query, query_all, set_displayed, visible_text};
use crate::selectors::{ACCOUNT_CARDS, CARD_ID_ATTR, CARD_PRICE_ATTR, PRICE_FILTER, SEARCH_INPUT};

struct Catalog {
    filter: CatalogFilter,
    elements: Vec<HtmlElement>,
}

impl Catalog {
    fn apply(&self) {
        for (element, visible) in self.elements.iter().zip(self.filter.visibility()) {
            set_displayed(element, visible);
        }
    }
}

pub fn mount(document: &Document, sold: ExclusionSet) -> Option<Listeners> {
    let mut cards = Vec::new();
    let mut elements = Vec::new();
    for element in query_all(document, ACCOUNT_CARDS) {
        let Ok(html) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        let id = html.get_attribute(CARD_ID_ATTR).unwrap_or_default();
        let price = html.get_attribute(CARD_PRICE_ATTR);
        cards.push(ItemCard::from_attributes(&id, price.as_deref(), visible_text(&html)));
        elements.push(html);
    }
    if cards.is_empty() {
        return None;
    }

    let search = query(document, SEARCH_INPUT);
    let bracket = query(document, PRICE_FILTER);

    let mut filter = CatalogFilter::new(cards, sold);
    if let Some(search) = &search {
        filter.set_query(&control_value(search));
    }
    if let Some(bracket) = &bracket {
        filter.set_bracket(PriceBracket::from_value(&control_value(bracket)));
    }

    let catalog = Rc::new(RefCell::new(Catalog { filter, elements }));
    catalog.borrow().apply();
    tracing::debug!(
        cards = catalog.borrow().elements.len(),
        visible = catalog.borrow().filter.visible_count(),
        "Catalog filter mounted"
    );

    let mut listeners = Vec::new();

    if let Some(search) = search {
        let catalog = Rc::clone(&catalog);
        let input = search.clone();
        listeners.push(EventListener::new(&search, "input", move |_| {
            let mut catalog = catalog.borrow_mut();
            catalog.filter.set_query(&control_value(&input));
            catalog.apply();
        }));
    }

    if let Some(bracket) = bracket {
        let catalog = Rc::clone(&catalog);
        let select = bracket.clone();
        listeners.push(EventListener::new(&bracket, "change", move |_| {
            let mut catalog = catalog.borrow_mut();
            catalog
                .filter
                .set_bracket(PriceBracket::from_value(&control_value(&select)));
            catalog.apply();
        }));
    }

    Some(listeners)
}
