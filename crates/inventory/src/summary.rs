use crate::size::StockLevel;
use crate::store::ItemStore;

/// Summary counters shown above the item list.
///
/// Always computed over the whole store, never the filtered view. An item with
/// both an empty size and a low size counts toward both counters.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct StockSummary {
    pub total_items: usize,
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
}

impl StockSummary {
    pub fn compute(store: &ItemStore) -> Self {
        store.iter().fold(Self::default(), |mut acc, item| {
            acc.total_items += 1;
            if item.stock().any_at(StockLevel::Low) {
                acc.low_stock_count += 1;
            }
            if item.stock().any_at(StockLevel::Out) {
                acc.out_of_stock_count += 1;
            }
            acc
        })
    }
}
