//! Filtered views over the store.
//!
//! Category, search and stock-level filters combine with AND. The output is
//! always a subsequence of the store in store order.

use core::str::FromStr;

use aanya_core::DomainError;

use crate::item::Item;
use crate::size::StockLevel;
use crate::store::ItemStore;

/// Category tab selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive category match.
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category() == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    /// `"all"` selects every category; anything else is taken literally.
    fn from(value: &str) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

/// Stock-level dropdown selection.
///
/// A level filter matches an item when **any** of its sizes is at that level.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum StockFilter {
    #[default]
    All,
    Level(StockLevel),
}

impl StockFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            StockFilter::All => true,
            StockFilter::Level(level) => item.stock().any_at(*level),
        }
    }
}

impl FromStr for StockFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StockFilter::All);
        }
        s.parse().map(StockFilter::Level)
    }
}

/// Current (category, search, stock) selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub search: String,
    pub stock: StockFilter,
}

impl FilterState {
    pub fn new(category: CategoryFilter, search: impl Into<String>, stock: StockFilter) -> Self {
        Self {
            category,
            search: search.into(),
            stock,
        }
    }

    /// Whether every axis passes everything.
    pub fn is_pass_through(&self) -> bool {
        self.category == CategoryFilter::All
            && self.search.is_empty()
            && self.stock == StockFilter::All
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.category.matches(item) && search_matches(&self.search, item) && self.stock.matches(item)
    }
}

/// Case-insensitive substring match on name or color. Empty search passes.
fn search_matches(search: &str, item: &Item) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    item.name().to_lowercase().contains(&needle) || item.color().to_lowercase().contains(&needle)
}

/// Items passing `filter`, in store order.
pub fn filter_items<'a>(store: &'a ItemStore, filter: &FilterState) -> Vec<&'a Item> {
    store.iter().filter(|item| filter.matches(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aanya_core::ItemId;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    use crate::size::SizeStock;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    fn ids(items: &[&Item]) -> Vec<u64> {
        items.iter().map(|item| item.id().get()).collect()
    }

    #[test]
    fn pass_through_returns_whole_store() {
        let store = ItemStore::sample();
        let filter = FilterState::default();
        assert!(filter.is_pass_through());
        assert_eq!(ids(&filter_items(&store, &filter)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn category_filter_is_exact() {
        let store = ItemStore::sample();
        let filter = FilterState::new("Coord Sets".into(), "", StockFilter::All);
        assert_eq!(ids(&filter_items(&store, &filter)), vec![1, 4]);

        let filter = FilterState::new("coord sets".into(), "", StockFilter::All);
        assert!(filter_items(&store, &filter).is_empty());
    }

    #[test]
    fn search_matches_color_case_insensitively() {
        let store = ItemStore::sample();
        let filter = FilterState::new(CategoryFilter::All, "pink", StockFilter::All);
        assert_eq!(ids(&filter_items(&store, &filter)), vec![1]);
    }

    #[test]
    fn search_matches_name_substring() {
        let store = ItemStore::sample();
        let filter = FilterState::new(CategoryFilter::All, "COTTON", StockFilter::All);
        assert_eq!(ids(&filter_items(&store, &filter)), vec![2, 5]);
    }

    #[test]
    fn stock_filter_uses_any_size_semantics() {
        let item = Item::from_parts(
            ItemId::new(5),
            "Cotton Straight Pants",
            "Cotton Wear",
            899,
            "Black",
            SizeStock::from_quantities([0, 2, 7, 12, 4]),
            test_date(),
        );
        for level in [StockLevel::Out, StockLevel::Low, StockLevel::Good] {
            assert!(StockFilter::Level(level).matches(&item), "should match {level}");
        }
    }

    #[test]
    fn out_filter_on_sample_data() {
        let store = ItemStore::sample();
        let filter = FilterState::new(CategoryFilter::All, "", StockFilter::Level(StockLevel::Out));
        assert_eq!(ids(&filter_items(&store, &filter)), vec![2, 5]);
    }

    #[test]
    fn axes_combine_with_and() {
        let store = ItemStore::sample();
        let filter = FilterState::new(
            "Cotton Wear".into(),
            "kurti",
            StockFilter::Level(StockLevel::Out),
        );
        assert_eq!(ids(&filter_items(&store, &filter)), vec![2]);
    }

    #[test]
    fn stock_filter_parses_dropdown_values() {
        assert_eq!("all".parse::<StockFilter>().unwrap(), StockFilter::All);
        assert_eq!(
            "low".parse::<StockFilter>().unwrap(),
            StockFilter::Level(StockLevel::Low)
        );
        assert!("plenty".parse::<StockFilter>().is_err());
        assert_eq!(CategoryFilter::from("all"), CategoryFilter::All);
    }

    fn arb_item(id: u64) -> impl Strategy<Value = Item> {
        (
            prop::sample::select(vec!["Coord Sets", "Cotton Wear", "Festive Wear"]),
            prop::sample::select(vec!["Pink", "Blue", "Red", "White"]),
            prop::array::uniform5(0u32..25),
        )
            .prop_map(move |(category, color, quantities)| {
                Item::from_parts(
                    ItemId::new(id),
                    format!("Item {id}"),
                    category,
                    100,
                    color,
                    SizeStock::from_quantities(quantities),
                    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                )
            })
    }

    fn arb_store() -> impl Strategy<Value = ItemStore> {
        (0usize..12)
            .prop_flat_map(|n| (1..=n as u64).map(arb_item).collect::<Vec<_>>())
            .prop_map(|items| ItemStore::from_items(items).unwrap())
    }

    fn arb_filter() -> impl Strategy<Value = FilterState> {
        (
            prop::sample::select(vec!["all", "Coord Sets", "Cotton Wear", "Festive Wear"]),
            prop::sample::select(vec!["", "pink", "BLUE", "item 1", "zzz"]),
            prop::sample::select(vec!["all", "good", "low", "out"]),
        )
            .prop_map(|(category, search, stock)| {
                FilterState::new(category.into(), search, stock.parse().unwrap())
            })
    }

    proptest! {
        /// Property: the filtered view is an order-preserving subsequence of the store.
        #[test]
        fn filtered_view_is_ordered_subsequence(store in arb_store(), filter in arb_filter()) {
            let view = filter_items(&store, &filter);
            let mut cursor = store.iter();
            for item in &view {
                prop_assert!(cursor.any(|candidate| candidate.id() == item.id()));
            }
            prop_assert!(view.len() <= store.len());
        }

        /// Property: the pass-through filter is the identity.
        #[test]
        fn pass_through_is_identity(store in arb_store()) {
            let view = filter_items(&store, &FilterState::default());
            let expected: Vec<&Item> = store.iter().collect();
            prop_assert_eq!(view, expected);
        }
    }
}
