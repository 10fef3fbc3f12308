//! Image lightbox.
//!
//! A single shared overlay shows one image at a time. Opening while already
//! open swaps the image.

/// Escape closes the overlay no matter where focus is.
pub const CLOSE_KEY: &str = "Escape";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Closed,
    Open { src: String },
}

pub trait PreviewView {
    fn show(&self, src: &str);

    fn hide(&self);
}

/// Pick the image for a trigger: the override attribute wins over `src`,
/// and empty values count as missing.
pub fn resolve_source<'a>(override_src: Option<&'a str>, src: Option<&'a str>) -> Option<&'a str> {
    override_src
        .filter(|s| !s.is_empty())
        .or_else(|| src.filter(|s| !s.is_empty()))
}

pub struct ImagePreview<V> {
    view: V,
    state: PreviewState,
}

impl<V: PreviewView> ImagePreview<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            state: PreviewState::Closed,
        }
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PreviewState::Open { .. })
    }

    /// Show `src` in the overlay. Returns false for an empty source.
    pub fn open(&mut self, src: &str) -> bool {
        if src.is_empty() {
            return false;
        }
        self.view.show(src);
        self.state = PreviewState::Open {
            src: src.to_string(),
        };
        true
    }

    /// Open from a trigger's attributes; a trigger with no source is ignored.
    pub fn open_trigger(&mut self, override_src: Option<&str>, src: Option<&str>) -> bool {
        match resolve_source(override_src, src) {
            Some(src) => self.open(src),
            None => false,
        }
    }

    pub fn close(&mut self) {
        if self.is_open() {
            self.view.hide();
            self.state = PreviewState::Closed;
        }
    }

    /// Clicks on the image itself keep the overlay open.
    pub fn on_overlay_click(&mut self, on_backdrop: bool) {
        if on_backdrop {
            self.close();
        }
    }

    /// Returns true when the key closed the overlay.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == CLOSE_KEY && self.is_open() {
            self.close();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingView {
        calls: RefCell<Vec<String>>,
    }

    impl PreviewView for &RecordingView {
        fn show(&self, src: &str) {
            self.calls.borrow_mut().push(format!("show {src}"));
        }

        fn hide(&self) {
            self.calls.borrow_mut().push("hide".to_string());
        }
    }

    #[test]
    fn test_override_source_wins() {
        assert_eq!(resolve_source(Some("big.png"), Some("thumb.png")), Some("big.png"));
        assert_eq!(resolve_source(Some(""), Some("thumb.png")), Some("thumb.png"));
        assert_eq!(resolve_source(None, Some("")), None);
        assert_eq!(resolve_source(None, None), None);
    }

    #[test]
    fn test_open_replaces_source() {
        let view = RecordingView::default();
        let mut preview = ImagePreview::new(&view);

        assert!(preview.open("a.png"));
        assert!(preview.open("b.png"));

        assert_eq!(
            preview.state(),
            &PreviewState::Open {
                src: "b.png".to_string()
            }
        );
        assert_eq!(*view.calls.borrow(), vec!["show a.png", "show b.png"]);
    }

    #[test]
    fn test_trigger_without_source_is_ignored() {
        let view = RecordingView::default();
        let mut preview = ImagePreview::new(&view);

        assert!(!preview.open_trigger(Some(""), None));
        assert!(!preview.is_open());
        assert!(view.calls.borrow().is_empty());
    }

    #[test]
    fn test_image_click_keeps_overlay_open() {
        let view = RecordingView::default();
        let mut preview = ImagePreview::new(&view);
        preview.open("a.png");

        preview.on_overlay_click(false);
        assert!(preview.is_open());

        preview.on_overlay_click(true);
        assert!(!preview.is_open());
    }

    #[test]
    fn test_escape_closes_only_when_open() {
        let view = RecordingView::default();
        let mut preview = ImagePreview::new(&view);

        assert!(!preview.on_key("Escape"));
        assert!(view.calls.borrow().is_empty());

        preview.open("a.png");
        assert!(!preview.on_key("Enter"));
        assert!(preview.on_key("Escape"));
        assert_eq!(preview.state(), &PreviewState::Closed);
        assert_eq!(*view.calls.borrow(), vec!["show a.png", "hide"]);
    }
}
