//! Light/dark display mode.
//!
//! The mode lives in storage under a single key and is mirrored on the root
//! element's `data-theme` attribute. Applying the stored mode happens as early
//! as possible, before the page paints; the toggle label is synced later, once
//! the toggle control exists.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StorefrontResult;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Icon and text shown on the toggle while this mode is applied.
    pub fn label(self) -> ThemeLabel {
        match self {
            ThemeMode::Light => ThemeLabel {
                icon: "🌞",
                text: "Light",
            },
            ThemeMode::Dark => ThemeLabel {
                icon: "🌙",
                text: "Dark",
            },
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ();

    /// Only the exact lowercase names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeLabel {
    pub icon: &'static str,
    pub text: &'static str,
}

/// Where the applied mode becomes visible.
pub trait ThemeView {
    /// Set the root display attribute.
    fn apply_mode(&self, mode: ThemeMode);

    /// Update the toggle's icon/label pair. Views without a toggle ignore this.
    fn show_label(&self, label: ThemeLabel);
}

/// Persisted theme preference.
pub struct ThemePreference<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ThemePreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored mode, or dark when the slot is empty or holds anything else.
    pub fn get_theme(&self) -> ThemeMode {
        self.store
            .get(&self.key)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn set_theme(&self, mode: ThemeMode) -> StorefrontResult<()> {
        self.store.set(&self.key, mode.as_str())
    }

    /// Read the stored mode and put it on the page. Runs before first paint.
    pub fn apply_initial(&self, view: &impl ThemeView) -> ThemeMode {
        let mode = self.get_theme();
        view.apply_mode(mode);
        mode
    }
}

/// The theme toggle, wired once the document is ready.
pub struct ThemeController<S, V> {
    preference: ThemePreference<S>,
    view: V,
    current: ThemeMode,
}

impl<S: KeyValueStore, V: ThemeView> ThemeController<S, V> {
    /// Take over from [`ThemePreference::apply_initial`], which already
    /// applied `current`, and sync the toggle label.
    pub fn new(preference: ThemePreference<S>, view: V, current: ThemeMode) -> Self {
        let controller = Self {
            preference,
            view,
            current,
        };
        controller.sync_label();
        controller
    }

    pub fn current(&self) -> ThemeMode {
        self.current
    }

    pub fn sync_label(&self) {
        self.view.show_label(self.current.label());
    }

    /// Apply `mode` to the page and persist it.
    ///
    /// The page is updated even when storage refuses the write; the choice
    /// then lasts only until reload.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.current = mode;
        self.view.apply_mode(mode);
        self.sync_label();
        if let Err(e) = self.preference.set_theme(mode) {
            tracing::warn!(error = %e, %mode, "Theme preference not persisted");
        }
    }

    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.current.toggled();
        tracing::debug!(from = %self.current, to = %next, "Theme toggled");
        self.set_theme(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::storage::MemoryStore;

    #[derive(Default)]
    struct RecordingView {
        modes: RefCell<Vec<ThemeMode>>,
        labels: RefCell<Vec<ThemeLabel>>,
    }

    impl ThemeView for &RecordingView {
        fn apply_mode(&self, mode: ThemeMode) {
            self.modes.borrow_mut().push(mode);
        }

        fn show_label(&self, label: ThemeLabel) {
            self.labels.borrow_mut().push(label);
        }
    }

    #[test]
    fn test_missing_or_invalid_value_defaults_to_dark() {
        let store = MemoryStore::new();
        let pref = ThemePreference::new(&store, "navi-theme");
        assert_eq!(pref.get_theme(), ThemeMode::Dark);

        store.set("navi-theme", "sepia").unwrap();
        assert_eq!(pref.get_theme(), ThemeMode::Dark);

        store.set("navi-theme", "LIGHT").unwrap();
        assert_eq!(pref.get_theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_set_then_get_roundtrips() {
        let store = MemoryStore::new();
        let pref = ThemePreference::new(&store, "navi-theme");

        pref.set_theme(ThemeMode::Light).unwrap();
        assert_eq!(pref.get_theme(), ThemeMode::Light);
        assert_eq!(store.get("navi-theme").as_deref(), Some("light"));

        pref.set_theme(ThemeMode::Dark).unwrap();
        assert_eq!(pref.get_theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_apply_initial_sets_root_attribute() {
        let store = MemoryStore::new();
        store.set("navi-theme", "light").unwrap();
        let view = RecordingView::default();

        let mode = ThemePreference::new(&store, "navi-theme").apply_initial(&&view);

        assert_eq!(mode, ThemeMode::Light);
        assert_eq!(*view.modes.borrow(), vec![ThemeMode::Light]);
        assert!(view.labels.borrow().is_empty());
    }

    #[test]
    fn test_toggle_flips_persists_and_relabels() {
        let store = MemoryStore::new();
        let view = RecordingView::default();
        let pref = ThemePreference::new(&store, "navi-theme");
        let mut controller = ThemeController::new(pref, &view, ThemeMode::Dark);

        assert_eq!(controller.toggle(), ThemeMode::Light);
        assert_eq!(store.get("navi-theme").as_deref(), Some("light"));
        assert_eq!(controller.toggle(), ThemeMode::Dark);
        assert_eq!(store.get("navi-theme").as_deref(), Some("dark"));

        assert_eq!(*view.modes.borrow(), vec![ThemeMode::Light, ThemeMode::Dark]);
        let labels: Vec<_> = view.labels.borrow().iter().map(|l| l.text).collect();
        assert_eq!(labels, vec!["Dark", "Light", "Dark"]);
    }

    #[test]
    fn test_label_mapping() {
        assert_eq!(ThemeMode::Light.label().icon, "🌞");
        assert_eq!(ThemeMode::Dark.label().icon, "🌙");
        assert_eq!(ThemeMode::Dark.label().text, "Dark");
    }
}
