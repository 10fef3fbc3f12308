//! Page bootstrap.
//!
//! Two phases:
//! - **Before paint**: apply the stored theme to the root element, so the
//!   page never flashes the wrong mode. Holds only when the page loads the
//!   module render-blocking from `<head>` (see the crate docs).
//! - **DOM ready**: detect each optional feature and attach its listeners.
//!   Deferred to `DOMContentLoaded` when the module starts mid-parse.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use storefront_core::{KeyValueStore, MemoryStore, SiteConfig, ThemeMode, ThemePreference};
use web_sys::Document;

use crate::components::{self, DocumentTheme, Listeners};
use crate::dom::{query, LocalStore};
use crate::selectors::SITE_CONFIG;

/// Shared storage handle for every feature.
pub type SharedStore = Rc<dyn KeyValueStore>;

thread_local! {
    /// Listeners of every mounted feature, kept for the life of the page.
    static MOUNTED: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Raw JSON of the page's embedded configuration block, if any.
pub fn embedded_config(document: &Document) -> Option<String> {
    query(document, SITE_CONFIG)?.text_content()
}

/// `localStorage`, or an in-memory stand-in when the browser refuses it.
fn open_store() -> SharedStore {
    match LocalStore::open() {
        Some(store) => Rc::new(store),
        None => {
            tracing::warn!("localStorage unavailable, preferences last for this page only");
            Rc::new(MemoryStore::new())
        }
    }
}

pub struct App {
    features: Vec<(&'static str, Listeners)>,
}

impl App {
    /// Attach every feature the page has markup for.
    fn mount(
        document: &Document,
        config: &SiteConfig,
        store: &SharedStore,
        theme: ThemeMode,
    ) -> Self {
        let _span = tracing::info_span!("mount").entered();
        let mut app = Self {
            features: Vec::new(),
        };

        let preference = ThemePreference::new(Rc::clone(store), config.theme_key.clone());
        app.add(
            "theme-toggle",
            components::mount_theme_toggle(document, preference, theme),
        );

        if components::mount_footer_year(document) {
            app.add("footer-year", Some(Vec::new()));
        }

        app.add(
            "catalog",
            components::mount_catalog(document, config.exclusion_set()),
        );
        app.add("lightbox", components::mount_lightbox(document));

        match components::mount_reviews(document, Rc::clone(store), config) {
            Ok(listeners) => app.add("reviews", listeners),
            Err(e) => tracing::warn!(error = %e, "Review board disabled"),
        }

        app.add(
            "contact-popup",
            components::mount_contact_popup(document, config.chime_src.as_deref()),
        );
        app.add("mobile-nav", components::mount_mobile_nav(document));

        tracing::info!(features = ?app.feature_names(), "Storefront ready");
        app
    }

    fn add(&mut self, name: &'static str, listeners: Option<Listeners>) {
        match listeners {
            Some(listeners) => self.features.push((name, listeners)),
            None => tracing::debug!(feature = name, "Feature markup absent, skipped"),
        }
    }

    pub fn feature_names(&self) -> Vec<&'static str> {
        self.features.iter().map(|(name, _)| *name).collect()
    }
}

/// Start the behavior layer.
///
/// The theme is applied right away. Feature mounting waits for
/// `DOMContentLoaded` when the document is still parsing, which is the usual
/// case for an async module loaded from `<head>`.
pub fn launch(document: Document, config: SiteConfig) {
    let store = open_store();

    let preference = ThemePreference::new(Rc::clone(&store), config.theme_key.clone());
    let theme = match document.document_element() {
        Some(root) => preference.apply_initial(&DocumentTheme::root_only(root)),
        None => preference.get_theme(),
    };

    let ready = move |document: &Document| {
        let app = App::mount(document, &config, &store, theme);
        MOUNTED.with(|mounted| *mounted.borrow_mut() = Some(app));
    };

    if document.ready_state() == "loading" {
        let target = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_| ready(&target)).forget();
    } else {
        ready(&document);
    }
}
