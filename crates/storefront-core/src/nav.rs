//! Collapsible mobile menu.

pub trait NavView {
    fn set_open(&self, open: bool);
}

pub struct MobileNav<V> {
    view: V,
    open: bool,
}

impl<V: NavView> MobileNav<V> {
    pub fn new(view: V) -> Self {
        Self { view, open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.view.set_open(self.open);
    }

    pub fn close(&mut self) {
        if self.open {
            self.open = false;
            self.view.set_open(false);
        }
    }

    /// Clicks outside the menu and its toggle close the menu.
    pub fn on_document_click(&mut self, inside_nav: bool) {
        if !inside_nav {
            self.close();
        }
    }
}
