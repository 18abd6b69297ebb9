use std::collections::HashSet;

use aanya_core::{DomainError, DomainResult, ItemId};

use crate::item::Item;
use crate::seed;

/// Ordered collection of items.
///
/// Insertion order is the iteration order everywhere; nothing sorts. Lookups by
/// a stale id simply find nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from existing items, rejecting duplicate ids.
    ///
    /// Blank colors get the same default a newly created item would.
    pub fn from_items(mut items: Vec<Item>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &mut items {
            if !seen.insert(item.id()) {
                return Err(DomainError::validation(format!(
                    "duplicate item id {}",
                    item.id()
                )));
            }
            item.normalize_color();
        }
        Ok(Self { items })
    }

    /// Store preloaded with the sample stock list.
    pub fn sample() -> Self {
        Self {
            items: seed::sample_items(),
        }
    }

    /// Load a JSON array of items (seed file format).
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let items: Vec<Item> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("invalid seed data: {e}")))?;
        Self::from_items(items)
    }

    pub fn to_json(&self) -> DomainResult<String> {
        serde_json::to_string_pretty(&self.items)
            .map_err(|e| DomainError::validation(format!("failed to serialize items: {e}")))
    }

    pub fn all(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find_by_id(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Append an item. Returns `false` (and stores nothing) if the id is taken.
    pub fn insert(&mut self, item: Item) -> bool {
        if self.find_by_id(item.id()).is_some() {
            tracing::warn!(item_id = %item.id(), "refusing to insert duplicate item id");
            return false;
        }
        self.items.push(item);
        true
    }

    /// Swap in a new version of an item, keeping its position.
    ///
    /// The replacement keeps the stored id; returns `false` if `id` is unknown
    /// or `item` carries a different id.
    pub fn replace(&mut self, id: ItemId, item: Item) -> bool {
        if item.id() != id {
            return false;
        }
        match self.find_by_id_mut(id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn max_id(&self) -> Option<ItemId> {
        self.items.iter().map(Item::id).max()
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(Item::category)
            .filter(|category| seen.insert(*category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemDraft;
    use chrono::NaiveDate;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    fn named(id: u64, name: &str) -> Item {
        Item::from_draft(ItemId::new(id), ItemDraft::new().name(name), test_date())
    }

    #[test]
    fn insert_preserves_order_and_rejects_duplicates() {
        let mut store = ItemStore::new();
        assert!(store.insert(named(2, "b")));
        assert!(store.insert(named(1, "a")));
        assert!(!store.insert(named(2, "dup")));

        let names: Vec<&str> = store.iter().map(Item::name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn replace_keeps_position() {
        let mut store = ItemStore::from_items(vec![named(1, "a"), named(2, "b"), named(3, "c")]).unwrap();
        assert!(store.replace(ItemId::new(2), named(2, "B")));
        let names: Vec<&str> = store.iter().map(Item::name).collect();
        assert_eq!(names, vec!["a", "B", "c"]);
    }

    #[test]
    fn replace_with_unknown_or_mismatched_id_is_noop() {
        let mut store = ItemStore::from_items(vec![named(1, "a")]).unwrap();
        assert!(!store.replace(ItemId::new(9), named(9, "x")));
        assert!(!store.replace(ItemId::new(1), named(9, "x")));
        assert_eq!(store.find_by_id(ItemId::new(1)).unwrap().name(), "a");
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut store = ItemStore::from_items(vec![named(1, "a")]).unwrap();
        assert!(store.remove(ItemId::new(42)).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn from_items_rejects_duplicate_ids() {
        let err = ItemStore::from_items(vec![named(1, "a"), named(1, "b")]).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for duplicate ids"),
        }
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let store = ItemStore::sample();
        assert_eq!(
            store.categories(),
            vec!["Coord Sets", "Cotton Wear", "Festive Wear"]
        );
    }

    #[test]
    fn json_round_trip_keeps_items() {
        let store = ItemStore::sample();
        let json = store.to_json().unwrap();
        assert_eq!(ItemStore::from_json(&json).unwrap(), store);
    }

    #[test]
    fn from_json_fills_creation_defaults() {
        let json = r#"[
            {"id": 7, "name": "Plain Kurta", "category": "Cotton Wear", "price": 899,
             "color": "  ", "dateAdded": "2025-09-01"}
        ]"#;
        let store = ItemStore::from_json(json).unwrap();
        let item = store.find_by_id(ItemId::new(7)).unwrap();
        assert_eq!(item.color(), crate::item::DEFAULT_COLOR);
        assert_eq!(item.stock().total(), 0);
    }

    #[test]
    fn from_json_reports_malformed_input() {
        let err = ItemStore::from_json(r#"[{"id": "x"}]"#).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("invalid seed data")),
            _ => panic!("Expected Validation error"),
        }
    }
}
