//! Site configuration.
//!
//! Every field has a built-in default, so a page without any configuration
//! behaves like the stock storefront. A page can override a subset by
//! embedding a JSON block:
//!
//! ```html
//! <script type="application/json" data-storefront-config>
//!   { "sold_ids": ["acc1", "acc3"], "log_filter": "debug" }
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::ExclusionSet;
use crate::error::{StorefrontError, StorefrontResult};

/// Storage key for the persisted theme preference.
pub const DEFAULT_THEME_KEY: &str = "navi-theme";

/// Storage key for the persisted review list.
pub const DEFAULT_REVIEWS_KEY: &str = "navi-store-reviews";

/// Accounts already sold. Ids must match `data-id` on the catalog cards.
pub const DEFAULT_SOLD_IDS: &[&str] = &["acc1", "acc2"];

/// Notification sound played when the contact popup opens.
pub const DEFAULT_CHIME_SRC: &str = "wa-popup-open.mp3";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Storage key holding "light" or "dark"
    pub theme_key: String,
    /// Storage key holding the JSON review list
    pub reviews_key: String,
    /// Card ids hidden regardless of search and price filters
    pub sold_ids: Vec<String>,
    /// Audio asset for the contact popup; `None` keeps the popup silent
    pub chime_src: Option<String>,
    /// Name used when a reviewer leaves the name field blank
    pub default_reviewer: String,
    /// Badge stamped on reviews submitted from this browser
    pub local_badge: String,
    /// Badge shown for stored reviews that carry none
    pub fallback_badge: String,
    /// `tracing_subscriber::EnvFilter` directive for console logging
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_string(),
            reviews_key: DEFAULT_REVIEWS_KEY.to_string(),
            sold_ids: DEFAULT_SOLD_IDS.iter().map(|id| id.to_string()).collect(),
            chime_src: Some(DEFAULT_CHIME_SRC.to_string()),
            default_reviewer: "Player".to_string(),
            local_badge: "Local review".to_string(),
            fallback_badge: "Player review".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse an embedded configuration block. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> StorefrontResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// The sold-account ids as a lookup set.
    pub fn exclusion_set(&self) -> ExclusionSet {
        ExclusionSet::from_ids(self.sold_ids.iter().cloned())
    }

    fn validate(&self) -> StorefrontResult<()> {
        if self.theme_key.is_empty() || self.reviews_key.is_empty() {
            return Err(StorefrontError::Config(
                "storage keys must not be empty".to_string(),
            ));
        }
        if self.theme_key == self.reviews_key {
            return Err(StorefrontError::Config(format!(
                "theme and review data cannot share the storage key {:?}",
                self.theme_key
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_page() {
        let config = SiteConfig::default();
        assert_eq!(config.theme_key, "navi-theme");
        assert_eq!(config.reviews_key, "navi-store-reviews");
        assert_eq!(config.sold_ids, vec!["acc1", "acc2"]);
        assert_eq!(config.chime_src.as_deref(), Some("wa-popup-open.mp3"));
        assert!(config.exclusion_set().contains("acc2"));
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_json(r#"{"sold_ids": ["acc3"], "log_filter": "debug"}"#)
            .unwrap();
        assert_eq!(config.sold_ids, vec!["acc3"]);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.reviews_key, DEFAULT_REVIEWS_KEY);
        assert!(!config.exclusion_set().contains("acc1"));
    }

    #[test]
    fn test_null_chime_disables_sound() {
        let config = SiteConfig::from_json(r#"{"chime_src": null}"#).unwrap();
        assert!(config.chime_src.is_none());
    }

    #[test]
    fn test_shared_storage_key_rejected() {
        let err = SiteConfig::from_json(r#"{"theme_key": "k", "reviews_key": "k"}"#).unwrap_err();
        assert!(matches!(err, StorefrontError::Config(_)));
    }

    #[test]
    fn test_malformed_block_rejected() {
        let err = SiteConfig::from_json("{oops").unwrap_err();
        assert!(matches!(err, StorefrontError::Serialization(_)));
    }
}
