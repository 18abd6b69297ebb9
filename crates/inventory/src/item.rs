use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use aanya_core::ItemId;

use crate::size::{Size, SizeStock, StockLevel};

/// Color recorded when none was given.
pub const DEFAULT_COLOR: &str = "Not specified";

/// One inventory record.
///
/// `id` and `date_added` are fixed at creation; every other field can be
/// replaced through [`Item::merge`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: ItemId,
    name: String,
    category: String,
    price: u64,
    color: String,
    #[serde(default)]
    stock: SizeStock,
    date_added: NaiveDate,
}

impl Item {
    /// Materialize a draft as a new item. Missing fields take their defaults.
    pub fn from_draft(id: ItemId, draft: ItemDraft, date_added: NaiveDate) -> Self {
        let ItemDraft {
            name,
            category,
            price,
            color,
            stock,
        } = draft;

        Self {
            id,
            name: name.unwrap_or_default(),
            category: category.unwrap_or_default(),
            price: price.unwrap_or(0),
            color: color_or_default(color.as_deref()),
            stock: stock.unwrap_or_default().into_stock(),
            date_added,
        }
    }

    /// Build an item from fully-known fields (seed data, fixtures).
    pub fn from_parts(
        id: ItemId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: u64,
        color: impl Into<String>,
        stock: SizeStock,
        date_added: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
            color: color.into(),
            stock,
            date_added,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn stock(&self) -> &SizeStock {
        &self.stock
    }

    pub fn date_added(&self) -> NaiveDate {
        self.date_added
    }

    /// Per-size quantity with its stock level, in size order.
    pub fn size_levels(&self) -> impl Iterator<Item = (Size, u32, StockLevel)> + '_ {
        self.stock
            .iter()
            .map(|(size, quantity)| (size, quantity, StockLevel::classify(quantity)))
    }

    /// Overlay the fields present in `draft`. Identity and creation date stay.
    /// Apply the blank-color default to an item that skipped [`Item::from_draft`].
    pub(crate) fn normalize_color(&mut self) {
        self.color = color_or_default(Some(self.color.as_str()));
    }

    pub fn merge(&mut self, draft: ItemDraft) {
        if let Some(name) = draft.name {
            self.name = name;
        }
        if let Some(category) = draft.category {
            self.category = category;
        }
        if let Some(price) = draft.price {
            self.price = price;
        }
        if let Some(color) = draft.color {
            self.color = color_or_default(Some(color.as_str()));
        }
        if let Some(stock) = draft.stock {
            stock.apply_to(&mut self.stock);
        }
    }
}

fn color_or_default(color: Option<&str>) -> String {
    match color.map(str::trim) {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => DEFAULT_COLOR.to_string(),
    }
}

/// Input for creating or updating an item.
///
/// Every field is optional: on create, absent fields take defaults; on update,
/// absent fields leave the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<u64>,
    pub color: Option<String>,
    pub stock: Option<StockDraft>,
}

impl ItemDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn price(mut self, price: u64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn stock(mut self, size: Size, quantity: u32) -> Self {
        self.stock
            .get_or_insert_with(StockDraft::default)
            .set(size, quantity);
        self
    }
}

/// Per-size quantities supplied by a draft; `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockDraft {
    quantities: [Option<u32>; 5],
}

impl StockDraft {
    pub fn set(&mut self, size: Size, quantity: u32) {
        self.quantities[size.index()] = Some(quantity);
    }

    pub fn get(&self, size: Size) -> Option<u32> {
        self.quantities[size.index()]
    }

    /// Resolve to concrete stock; sizes not given are 0.
    pub fn into_stock(self) -> SizeStock {
        let mut stock = SizeStock::default();
        self.apply_to(&mut stock);
        stock
    }

    fn apply_to(&self, stock: &mut SizeStock) {
        for size in Size::ALL {
            if let Some(quantity) = self.get(size) {
                stock.set(size, quantity);
            }
        }
    }
}
