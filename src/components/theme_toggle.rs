//! Theme toggle binding.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use storefront_core::{
    KeyValueStore, ThemeController, ThemeLabel, ThemeMode, ThemePreference, ThemeView,
};
use web_sys::{Document, Element};

use super::Listeners;
use crate::dom::{query, query_within};
use crate::selectors::{THEME_ATTR, THEME_ICON, THEME_LABEL, THEME_TOGGLE};

/// Root `data-theme` attribute plus the toggle's icon/label, when present.
pub struct DocumentTheme {
    root: Element,
    icon: Option<Element>,
    label: Option<Element>,
}

impl DocumentTheme {
    /// Root element only; used before the rest of the page exists.
    pub fn root_only(root: Element) -> Self {
        Self {
            root,
            icon: None,
            label: None,
        }
    }
}

impl ThemeView for DocumentTheme {
    fn apply_mode(&self, mode: ThemeMode) {
        if let Err(e) = self.root.set_attribute(THEME_ATTR, mode.as_str()) {
            tracing::warn!(error = ?e, "Could not apply theme");
        }
    }

    fn show_label(&self, label: ThemeLabel) {
        if let (Some(icon), Some(text)) = (&self.icon, &self.label) {
            icon.set_text_content(Some(label.icon));
            text.set_text_content(Some(label.text));
        }
    }
}

pub fn mount<S>(
    document: &Document,
    preference: ThemePreference<S>,
    current: ThemeMode,
) -> Option<Listeners>
where
    S: KeyValueStore + 'static,
{
    let toggle = query(document, THEME_TOGGLE)?;
    let root = document.document_element()?;

    let view = DocumentTheme {
        root,
        icon: query_within(&toggle, THEME_ICON),
        label: query_within(&toggle, THEME_LABEL),
    };
    let controller = Rc::new(RefCell::new(ThemeController::new(preference, view, current)));

    let on_click = EventListener::new(&toggle, "click", move |_| {
        controller.borrow_mut().toggle();
    });

    Some(vec![on_click])
}
