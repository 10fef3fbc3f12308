//! Floating contact widget.
//!
//! The button starts with an unread badge. The first open clears it for the
//! rest of the session; closing never brings it back.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupState {
    ClosedWithBadge,
    ClosedWithoutBadge,
    Open,
}

pub trait PopupView {
    fn set_badge(&self, visible: bool);

    fn set_open(&self, open: bool);

    /// Play the notification sound. Playback failures are the view's to swallow.
    fn play_chime(&self);
}

pub struct ContactPopup<V> {
    view: V,
    state: PopupState,
}

impl<V: PopupView> ContactPopup<V> {
    /// Mount the widget, showing the badge.
    pub fn new(view: V) -> Self {
        view.set_badge(true);
        Self {
            view,
            state: PopupState::ClosedWithBadge,
        }
    }

    pub fn state(&self) -> PopupState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PopupState::Open
    }

    pub fn open(&mut self) {
        match self.state {
            PopupState::Open => return,
            PopupState::ClosedWithBadge => self.view.set_badge(false),
            PopupState::ClosedWithoutBadge => {}
        }
        self.view.set_open(true);
        self.view.play_chime();
        self.state = PopupState::Open;
    }

    pub fn close(&mut self) {
        if self.is_open() {
            self.view.set_open(false);
            self.state = PopupState::ClosedWithoutBadge;
        }
    }

    /// Button click.
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Any click on the page; clicks inside the widget are ignored.
    pub fn on_document_click(&mut self, inside_widget: bool) {
        if !inside_widget {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingView {
        calls: RefCell<Vec<&'static str>>,
    }

    impl PopupView for &RecordingView {
        fn set_badge(&self, visible: bool) {
            self.calls
                .borrow_mut()
                .push(if visible { "badge on" } else { "badge off" });
        }

        fn set_open(&self, open: bool) {
            self.calls.borrow_mut().push(if open { "open" } else { "close" });
        }

        fn play_chime(&self) {
            self.calls.borrow_mut().push("chime");
        }
    }

    #[test]
    fn test_starts_with_badge() {
        let view = RecordingView::default();
        let popup = ContactPopup::new(&view);
        assert_eq!(popup.state(), PopupState::ClosedWithBadge);
        assert_eq!(*view.calls.borrow(), vec!["badge on"]);
    }

    #[test]
    fn test_badge_cleared_once() {
        let view = RecordingView::default();
        let mut popup = ContactPopup::new(&view);

        popup.toggle();
        popup.toggle();
        popup.toggle();

        assert_eq!(
            *view.calls.borrow(),
            vec!["badge on", "badge off", "open", "chime", "close", "open", "chime"]
        );
        assert_eq!(popup.state(), PopupState::Open);
    }

    #[test]
    fn test_outside_click_closes_without_restoring_badge() {
        let view = RecordingView::default();
        let mut popup = ContactPopup::new(&view);
        popup.open();

        popup.on_document_click(true);
        assert!(popup.is_open());

        popup.on_document_click(false);
        assert_eq!(popup.state(), PopupState::ClosedWithoutBadge);
    }

    #[test]
    fn test_outside_click_while_closed_keeps_badge() {
        let view = RecordingView::default();
        let mut popup = ContactPopup::new(&view);

        popup.on_document_click(false);
        popup.close();

        assert_eq!(popup.state(), PopupState::ClosedWithBadge);
        assert_eq!(*view.calls.borrow(), vec!["badge on"]);
    }
}
