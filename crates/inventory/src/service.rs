use aanya_core::{Clock, IdGenerator, ItemId, SystemClock};

use crate::item::{Item, ItemDraft};
use crate::query::{FilterState, filter_items};
use crate::store::ItemStore;
use crate::summary::StockSummary;

/// Owns the store and applies create/update/delete to it.
///
/// Mutations never fail: unknown ids are no-ops reported through the return
/// value, and drafts are defaulted rather than rejected.
#[derive(Debug)]
pub struct Inventory<C = SystemClock> {
    store: ItemStore,
    ids: IdGenerator,
    clock: C,
}

impl Inventory<SystemClock> {
    /// Inventory over `store`, dated by the local clock.
    pub fn new(store: ItemStore) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<C: Clock> Inventory<C> {
    pub fn with_clock(store: ItemStore, clock: C) -> Self {
        let ids = IdGenerator::after(store.max_id());
        Self { store, ids, clock }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn find_by_id(&self, id: ItemId) -> Option<&Item> {
        self.store.find_by_id(id)
    }

    pub fn filtered(&self, filter: &FilterState) -> Vec<&Item> {
        filter_items(&self.store, filter)
    }

    pub fn summary(&self) -> StockSummary {
        StockSummary::compute(&self.store)
    }

    /// Add a new item with a fresh id and today's date.
    pub fn create(&mut self, draft: ItemDraft) -> ItemId {
        let id = self.next_free_id();
        let item = Item::from_draft(id, draft, self.clock.today());
        tracing::info!(item_id = %id, name = item.name(), category = item.category(), "item created");
        let inserted = self.store.insert(item);
        debug_assert!(inserted, "next_free_id returned a taken id");
        id
    }

    fn next_free_id(&mut self) -> ItemId {
        // Items inserted behind our back can still hold ids ahead of the generator.
        while let Some(id) = self.ids.next_id() {
            if self.store.find_by_id(id).is_none() {
                return id;
            }
        }

        tracing::warn!("id counter exhausted, reusing the lowest free id");
        let mut taken: Vec<u64> = self.store.iter().map(|item| item.id().get()).collect();
        taken.sort_unstable();
        let mut candidate = 1u64;
        for id in taken {
            if id == candidate {
                candidate += 1;
            } else if id > candidate {
                break;
            }
        }
        ItemId::new(candidate)
    }

    /// Merge `draft` onto an existing item. Returns `false` if `id` is unknown.
    pub fn update(&mut self, id: ItemId, draft: ItemDraft) -> bool {
        match self.store.find_by_id_mut(id) {
            Some(item) => {
                item.merge(draft);
                tracing::info!(item_id = %id, "item updated");
                true
            }
            None => {
                tracing::debug!(item_id = %id, "update ignored: unknown item");
                false
            }
        }
    }

    /// Remove an item, returning it if it existed.
    pub fn delete(&mut self, id: ItemId) -> Option<Item> {
        let removed = self.store.remove(id);
        match &removed {
            Some(_) => tracing::info!(item_id = %id, "item deleted"),
            None => tracing::debug!(item_id = %id, "delete ignored: unknown item"),
        }
        removed
    }
}
