//! Local-only review board.
//!
//! Reviews are appended to a JSON array in browser storage and rendered into
//! the page. Nothing ever edits or removes a stored review. The whole array is
//! rewritten on each append; two tabs appending at once lose one of the
//! writes.

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::error::StorefrontResult;
use crate::parse::leading_int;
use crate::storage::KeyValueStore;

pub const MAX_RATING: u8 = 5;

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// Star strip for a rating: filled stars then empty ones, always five glyphs.
/// Ratings above five show five filled stars.
pub fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    std::iter::repeat(FILLED_STAR)
        .take(filled)
        .chain(std::iter::repeat(EMPTY_STAR).take(MAX_RATING as usize - filled))
        .collect()
}

/// Rating typed into the form. Blank, non-numeric and zero mean five stars;
/// everything else is clamped into 1..=5.
pub fn parse_rating(raw: &str) -> u8 {
    match leading_int(raw) {
        None | Some(0) => MAX_RATING,
        Some(value) => value.clamp(1, MAX_RATING as i64) as u8,
    }
}

/// A stored review record.
///
/// Missing fields in stored JSON load as empty values rather than failing
/// the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub name: String,
    pub rating: u8,
    pub stars: String,
    pub message: String,
    pub badge: String,
}

impl Review {
    pub fn new(
        name: impl Into<String>,
        rating: u8,
        message: impl Into<String>,
        badge: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            rating,
            stars: stars(rating),
            message: message.into(),
            badge: badge.into(),
        }
    }

    /// Badge to render, falling back when the record carries none.
    pub fn display_badge<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.badge.is_empty() {
            fallback
        } else {
            &self.badge
        }
    }
}

/// Raw form input, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub name: String,
    pub rating: String,
    pub message: String,
}

impl ReviewDraft {
    pub fn new(
        name: impl Into<String>,
        rating: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            rating: rating.into(),
            message: message.into(),
        }
    }

    /// Turn the draft into a review, or `None` when the message is blank.
    pub fn into_review(self, default_name: &str, badge: &str) -> Option<Review> {
        let message = self.message.trim();
        if message.is_empty() {
            return None;
        }
        let name = match self.name.trim() {
            "" => default_name,
            name => name,
        };
        Some(Review::new(name, parse_rating(&self.rating), message, badge))
    }
}

/// Persisted review sequence.
pub struct ReviewStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ReviewStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored reviews in insertion order.
    ///
    /// Unparsable data reads as an empty list; individual malformed records
    /// are skipped.
    pub fn load_all(&self) -> Vec<Review> {
        self.stored_records()
            .into_iter()
            .filter_map(|record| match serde_json::from_value(record) {
                Ok(review) => Some(review),
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping malformed review record");
                    None
                }
            })
            .collect()
    }

    /// Append one review, rewriting the whole stored list.
    ///
    /// Stored records are carried over as raw JSON, so entries that
    /// [`ReviewStore::load_all`] skips are never dropped by a write.
    pub fn append(&self, review: &Review) -> StorefrontResult<()> {
        let mut records = self.stored_records();
        records.push(serde_json::to_value(review)?);
        let raw = serde_json::to_string(&records)?;
        self.store.set(&self.key, &raw)
    }

    /// Raw stored array. Missing, unparsable or non-array data is empty.
    fn stored_records(&self) -> Vec<serde_json::Value> {
        let Some(raw) = self.store.get(&self.key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::debug!(error = %e, key = %self.key, "Discarding unreadable review data");
                Vec::new()
            }
        }
    }
}

/// The review list and form on the page.
pub trait ReviewListView {
    /// Add a rendered entry at the end of the list.
    fn render(&self, review: &Review, badge: &str);

    /// Clear the submission form.
    fn reset_form(&self);
}

/// Review form and list controller.
pub struct ReviewBoard<S, V> {
    store: ReviewStore<S>,
    view: V,
    default_reviewer: String,
    local_badge: String,
    fallback_badge: String,
    rendered: usize,
}

impl<S: KeyValueStore, V: ReviewListView> ReviewBoard<S, V> {
    pub fn new(store: ReviewStore<S>, view: V, config: &SiteConfig) -> Self {
        Self {
            store,
            view,
            default_reviewer: config.default_reviewer.clone(),
            local_badge: config.local_badge.clone(),
            fallback_badge: config.fallback_badge.clone(),
            rendered: 0,
        }
    }

    /// Render every stored review. Called once when the board is mounted.
    pub fn load(&mut self) -> usize {
        let reviews = self.store.load_all();
        for review in &reviews {
            self.show(review);
        }
        tracing::debug!(count = reviews.len(), "Restored stored reviews");
        reviews.len()
    }

    /// Handle a form submission. Blank messages are dropped without any
    /// change to the page or storage.
    pub fn submit(&mut self, draft: ReviewDraft) -> Option<Review> {
        let review = draft.into_review(&self.default_reviewer, &self.local_badge)?;

        self.show(&review);
        if let Err(e) = self.store.append(&review) {
            tracing::warn!(error = %e, "Review shown but not persisted");
        }
        self.view.reset_form();

        tracing::info!(rating = review.rating, "Review submitted");
        Some(review)
    }

    /// Number of entries this board has rendered.
    pub fn rendered_count(&self) -> usize {
        self.rendered
    }

    fn show(&mut self, review: &Review) {
        self.view
            .render(review, review.display_badge(&self.fallback_badge));
        self.rendered += 1;
    }
}
