//! Catalog search and price filtering.
//!
//! Cards are authored in the page and never created or destroyed at runtime;
//! the filter only decides which ones are shown. Sold accounts are hidden
//! before any other predicate is looked at.

use std::collections::{HashMap, HashSet};

use crate::parse::leading_int;

/// One account card as read from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub id: String,
    /// Price in the smallest currency unit
    pub price_cents: u64,
    /// Whole rendered card text, including nested labels and prices
    pub text: String,
    search_text: String,
}

impl ItemCard {
    pub fn new(id: impl Into<String>, price_cents: u64, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: id.into(),
            price_cents,
            search_text: text.to_lowercase(),
            text,
        }
    }

    /// Build a card from raw `data-id` / `data-price` attribute values.
    pub fn from_attributes(id: &str, price: Option<&str>, text: impl Into<String>) -> Self {
        Self::new(id, parse_price(price), text)
    }

    fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty() || self.search_text.contains(needle)
    }
}

/// Leading-integer price parsing. Missing, negative or non-numeric values are 0.
///
/// `"75000"` and `"75000 coins"` both give 75000.
pub fn parse_price(raw: Option<&str>) -> u64 {
    raw.and_then(leading_int)
        .map_or(0, |price| u64::try_from(price).unwrap_or(0))
}

/// Selectable price range.
///
/// The finite brackets are inclusive on both ends, so 10000 and 50000 each
/// belong to two brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PriceBracket {
    #[default]
    All,
    UpTo10k,
    From10kTo50k,
    From50kTo100k,
    From100kTo500k,
    Over500k,
}

impl PriceBracket {
    pub const ALL: [PriceBracket; 6] = [
        PriceBracket::All,
        PriceBracket::UpTo10k,
        PriceBracket::From10kTo50k,
        PriceBracket::From50kTo100k,
        PriceBracket::From100kTo500k,
        PriceBracket::Over500k,
    ];

    /// Map a `<select>` option value. Unknown values mean no price filter.
    pub fn from_value(value: &str) -> Self {
        match value {
            "0-10000" => PriceBracket::UpTo10k,
            "10000-50000" => PriceBracket::From10kTo50k,
            "50000-100000" => PriceBracket::From50kTo100k,
            "100000-500000" => PriceBracket::From100kTo500k,
            "500000+" => PriceBracket::Over500k,
            _ => PriceBracket::All,
        }
    }

    pub fn as_value(self) -> &'static str {
        match self {
            PriceBracket::All => "all",
            PriceBracket::UpTo10k => "0-10000",
            PriceBracket::From10kTo50k => "10000-50000",
            PriceBracket::From50kTo100k => "50000-100000",
            PriceBracket::From100kTo500k => "100000-500000",
            PriceBracket::Over500k => "500000+",
        }
    }

    pub fn contains(self, price: u64) -> bool {
        match self {
            PriceBracket::All => true,
            PriceBracket::UpTo10k => price <= 10_000,
            PriceBracket::From10kTo50k => (10_000..=50_000).contains(&price),
            PriceBracket::From50kTo100k => (50_000..=100_000).contains(&price),
            PriceBracket::From100kTo500k => (100_000..=500_000).contains(&price),
            PriceBracket::Over500k => price > 500_000,
        }
    }
}

/// Ids of accounts that are no longer for sale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    ids: HashSet<String>,
}

impl ExclusionSet {
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

fn visible_with(card: &ItemCard, needle: &str, bracket: PriceBracket, sold: &ExclusionSet) -> bool {
    if sold.contains(&card.id) {
        return false;
    }
    card.matches_search(needle) && bracket.contains(card.price_cents)
}

/// Whether a single card is shown for the given query and bracket.
pub fn is_visible(card: &ItemCard, query: &str, bracket: PriceBracket, sold: &ExclusionSet) -> bool {
    visible_with(card, &normalize_query(query), bracket, sold)
}

/// Visibility of every card, keyed by card id.
pub fn compute_visibility(
    cards: &[ItemCard],
    query: &str,
    bracket: PriceBracket,
    sold: &ExclusionSet,
) -> HashMap<String, bool> {
    let needle = normalize_query(query);
    cards
        .iter()
        .map(|card| (card.id.clone(), visible_with(card, &needle, bracket, sold)))
        .collect()
}

/// Filter state for one page's catalog.
#[derive(Debug, Clone)]
pub struct CatalogFilter {
    cards: Vec<ItemCard>,
    sold: ExclusionSet,
    needle: String,
    bracket: PriceBracket,
}

impl CatalogFilter {
    pub fn new(cards: Vec<ItemCard>, sold: ExclusionSet) -> Self {
        Self {
            cards,
            sold,
            needle: String::new(),
            bracket: PriceBracket::All,
        }
    }

    pub fn cards(&self) -> &[ItemCard] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn set_query(&mut self, query: &str) {
        self.needle = normalize_query(query);
    }

    pub fn set_bracket(&mut self, bracket: PriceBracket) {
        self.bracket = bracket;
    }

    pub fn bracket(&self) -> PriceBracket {
        self.bracket
    }

    /// Visibility per card, in card order.
    pub fn visibility(&self) -> Vec<bool> {
        self.cards
            .iter()
            .map(|card| visible_with(card, &self.needle, self.bracket, &self.sold))
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visibility().into_iter().filter(|v| *v).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cards() -> Vec<ItemCard> {
        vec![
            ItemCard::new("acc1", 60_000, "Sniper elite\nLevel 80"),
            ItemCard::new("acc3", 9_500, "Starter pack\n₹95"),
            ItemCard::new("acc5", 75_000, "Sniper pro\nMythic skins"),
            ItemCard::new("acc7", 800_000, "Whale account\nAll heroes"),
        ]
    }

    #[test]
    fn test_sold_card_hidden_under_any_filter() {
        let sold = ExclusionSet::from_ids(["acc1"]);
        let card = &sample_cards()[0];
        for bracket in PriceBracket::ALL {
            assert!(!is_visible(card, "", bracket, &sold));
            assert!(!is_visible(card, "sniper", bracket, &sold));
        }
    }

    #[test]
    fn test_sniper_scenario_shows_only_acc5() {
        let sold = ExclusionSet::from_ids(["acc1"]);
        let cards = vec![
            ItemCard::new("acc1", 60_000, "Sniper elite"),
            ItemCard::new("acc5", 75_000, "Sniper pro"),
        ];
        let visible = compute_visibility(
            &cards,
            "sniper",
            PriceBracket::from_value("50000-100000"),
            &sold,
        );
        assert_eq!(visible.get("acc1"), Some(&false));
        assert_eq!(visible.get("acc5"), Some(&true));
    }

    #[test]
    fn test_search_is_case_insensitive_over_whole_text() {
        let sold = ExclusionSet::default();
        let card = &sample_cards()[2];
        assert!(is_visible(card, "MYTHIC", PriceBracket::All, &sold));
        assert!(is_visible(card, "  pro\nmythic ", PriceBracket::All, &sold));
        assert!(!is_visible(card, "elite", PriceBracket::All, &sold));
    }

    #[test]
    fn test_bracket_boundaries() {
        assert!(PriceBracket::UpTo10k.contains(0));
        assert!(PriceBracket::UpTo10k.contains(10_000));
        assert!(PriceBracket::From10kTo50k.contains(10_000));
        assert!(PriceBracket::From10kTo50k.contains(50_000));
        assert!(PriceBracket::From50kTo100k.contains(50_000));
        assert!(PriceBracket::From100kTo500k.contains(500_000));
        assert!(!PriceBracket::Over500k.contains(500_000));
        assert!(PriceBracket::Over500k.contains(500_001));
        assert!(!PriceBracket::UpTo10k.contains(10_001));
    }

    #[test]
    fn test_unknown_bracket_value_means_all() {
        assert_eq!(PriceBracket::from_value("cheap"), PriceBracket::All);
        assert_eq!(PriceBracket::from_value(""), PriceBracket::All);
        for bracket in PriceBracket::ALL {
            assert_eq!(PriceBracket::from_value(bracket.as_value()), bracket);
        }
    }

    #[test]
    fn test_parse_price_leading_integer() {
        assert_eq!(parse_price(Some("75000")), 75_000);
        assert_eq!(parse_price(Some(" 75000 coins")), 75_000);
        assert_eq!(parse_price(Some("+12")), 12);
        assert_eq!(parse_price(Some("-500")), 0);
        assert_eq!(parse_price(Some("abc")), 0);
        assert_eq!(parse_price(Some("")), 0);
        assert_eq!(parse_price(None), 0);
        assert_eq!(parse_price(Some("99999999999999999999999")), i64::MAX as u64);
    }

    #[test]
    fn test_filter_tracks_query_and_bracket() {
        let mut filter = CatalogFilter::new(sample_cards(), ExclusionSet::from_ids(["acc1"]));
        assert_eq!(filter.visibility(), vec![false, true, true, true]);

        filter.set_bracket(PriceBracket::Over500k);
        assert_eq!(filter.visibility(), vec![false, false, false, true]);

        filter.set_bracket(PriceBracket::All);
        filter.set_query("sniper");
        assert_eq!(filter.visibility(), vec![false, false, true, false]);
        assert_eq!(filter.visible_count(), 1);

        filter.set_query("");
        assert_eq!(filter.visible_count(), 3);
    }

    #[test]
    fn test_missing_price_counts_as_zero() {
        let card = ItemCard::from_attributes("acc9", None, "Mystery box");
        assert_eq!(card.price_cents, 0);
        assert!(is_visible(&card, "", PriceBracket::UpTo10k, &ExclusionSet::default()));
    }
}
