//! Page features, each bound to the document on its own.
//!
//! Every `mount` function checks for the elements its feature needs and
//! returns `None` when any are missing. The returned listeners own the
//! feature's controller; dropping them detaches the feature.

use gloo::events::EventListener;

mod catalog;
mod contact_popup;
mod footer_year;
mod lightbox;
mod mobile_nav;
mod reviews;
mod theme_toggle;

pub use catalog::mount as mount_catalog;
pub use contact_popup::mount as mount_contact_popup;
pub use footer_year::mount as mount_footer_year;
pub use lightbox::mount as mount_lightbox;
pub use mobile_nav::mount as mount_mobile_nav;
pub use reviews::mount as mount_reviews;
pub use theme_toggle::{mount as mount_theme_toggle, DocumentTheme};

/// Listeners keeping one mounted feature alive.
pub type Listeners = Vec<EventListener>;
