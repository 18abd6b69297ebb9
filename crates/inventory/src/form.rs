//! Raw form values and their coercion into an [`ItemDraft`].
//!
//! A form hands over text for every field. Numbers are read leniently: the
//! leading integer is taken, anything unreadable becomes 0 and negative values
//! clamp to 0. Nothing here can fail.

use crate::item::{Item, ItemDraft, StockDraft};
use crate::size::Size;

/// Text values of the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub color: String,
    stock: [String; 5],
}

impl ItemForm {
    /// An empty form with every stock field reset to `"0"`.
    pub fn blank() -> Self {
        Self {
            stock: Size::ALL.map(|_| "0".to_string()),
            ..Self::default()
        }
    }

    /// Prefill from an existing item (edit mode).
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name().to_string(),
            category: item.category().to_string(),
            price: item.price().to_string(),
            color: item.color().to_string(),
            stock: Size::ALL.map(|size| item.stock().get(size).to_string()),
        }
    }

    pub fn stock(&self, size: Size) -> &str {
        &self.stock[size.index()]
    }

    pub fn set_stock(&mut self, size: Size, value: impl Into<String>) {
        self.stock[size.index()] = value.into();
    }

    /// Coerce into a draft carrying every field.
    ///
    /// Name and color are trimmed; a blank color is resolved to the default
    /// by the item itself.
    pub fn to_draft(&self) -> ItemDraft {
        let mut stock = StockDraft::default();
        for size in Size::ALL {
            stock.set(size, clamp_u32(parse_lenient(self.stock(size))));
        }

        ItemDraft {
            name: Some(self.name.trim().to_string()),
            category: Some(self.category.clone()),
            price: Some(parse_lenient(&self.price)),
            color: Some(self.color.trim().to_string()),
            stock: Some(stock),
        }
    }
}

fn clamp_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Read the leading integer of `input`.
///
/// Leading whitespace and one sign are accepted, then digits up to the first
/// non-digit. No digits, or a negative number, gives 0. Overflow saturates.
pub fn parse_lenient(input: &str) -> u64 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: u64 = 0;
    let mut seen_digit = false;
    for byte in rest.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(u64::from(byte - b'0'));
    }

    if !seen_digit || negative { 0 } else { value }
}
