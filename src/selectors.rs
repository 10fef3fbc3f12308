//! Attribute hooks the page markup exposes.
//!
//! Every hook is optional; a missing element disables its feature.

// === THEME ===
pub const THEME_TOGGLE: &str = "[data-theme-toggle]";
pub const THEME_ICON: &str = "[data-theme-icon]";
pub const THEME_LABEL: &str = "[data-theme-label]";
pub const THEME_ATTR: &str = "data-theme";

// === FOOTER ===
pub const YEAR_ID: &str = "year";

// === CATALOG ===
pub const SEARCH_INPUT: &str = "[data-search]";
pub const PRICE_FILTER: &str = "[data-price-filter]";
pub const ACCOUNT_CARDS: &str = ".account-card[data-id]";
pub const CARD_ID_ATTR: &str = "data-id";
pub const CARD_PRICE_ATTR: &str = "data-price";

// === LIGHTBOX ===
pub const PREVIEW_TRIGGERS: &str = "[data-preview]";
pub const PREVIEW_SRC_ATTR: &str = "data-preview-src";
pub const PREVIEW_OVERLAY: &str = "[data-preview-overlay]";
pub const PREVIEW_IMAGE: &str = "[data-preview-image]";
pub const PREVIEW_CLOSE: &str = "[data-preview-close]";
pub const PREVIEW_OPEN_CLASS: &str = "active";

// === REVIEWS ===
pub const REVIEW_FORM_ID: &str = "review-form";
pub const REVIEW_LIST_ID: &str = "review-list";

// === CONTACT POPUP ===
pub const CONTACT_BUTTON_ID: &str = "wa-float-btn";
pub const CONTACT_POPUP_ID: &str = "wa-popup";
pub const CONTACT_CLOSE_ID: &str = "wa-close";
pub const BADGE_CLASS: &str = "has-notif";

// === MOBILE NAV ===
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_MENU_ID: &str = "mobileMenu";
pub const NAV_OPEN_CLASS: &str = "open";

// === CONFIG ===
pub const SITE_CONFIG: &str = "script[data-storefront-config]";
