//! Navi Store Core Library
//!
//! DOM-free controllers behind the storefront's browser behavior layer.
//!
//! ## Overview
//!
//! The storefront is a static page listing pre-owned game accounts. Every
//! interactive feature on it is a small, self-contained controller:
//!
//! - **Theme**: persisted light/dark preference ([`ThemeController`])
//! - **Catalog**: search and price filtering over static cards ([`CatalogFilter`])
//! - **Reviews**: local-only review board ([`ReviewBoard`])
//! - **Preview**: image lightbox ([`ImagePreview`])
//! - **Popup**: floating contact widget with an unread badge ([`ContactPopup`])
//! - **Nav**: collapsible mobile menu ([`MobileNav`])
//!
//! Controllers hold their own state and talk to the page through small view
//! traits, so the whole crate runs and tests without a browser. The
//! `storefront` binary supplies the `web-sys` implementations.
//!
//! ## Quick Start
//!
//! ```
//! use storefront_core::{CatalogFilter, ExclusionSet, ItemCard, PriceBracket};
//!
//! let cards = vec![
//!     ItemCard::new("acc1", 60_000, "Sniper elite"),
//!     ItemCard::new("acc5", 75_000, "Sniper pro"),
//! ];
//! let mut filter = CatalogFilter::new(cards, ExclusionSet::from_ids(["acc1"]));
//! filter.set_query("sniper");
//! filter.set_bracket(PriceBracket::From50kTo100k);
//!
//! assert_eq!(filter.visibility(), vec![false, true]);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod nav;
mod parse;
pub mod popup;
pub mod preview;
pub mod reviews;
pub mod storage;
pub mod theme;

// Re-exports
pub use catalog::{
    compute_visibility, is_visible, parse_price, CatalogFilter, ExclusionSet, ItemCard, PriceBracket,
};
pub use config::SiteConfig;
pub use error::{StorefrontError, StorefrontResult};
pub use nav::{MobileNav, NavView};
pub use popup::{ContactPopup, PopupState, PopupView};
pub use preview::{resolve_source, ImagePreview, PreviewState, PreviewView};
pub use reviews::{stars, Review, ReviewBoard, ReviewDraft, ReviewListView, ReviewStore};
pub use storage::{KeyValueStore, MemoryStore};
pub use theme::{ThemeController, ThemeLabel, ThemeMode, ThemePreference, ThemeView};
