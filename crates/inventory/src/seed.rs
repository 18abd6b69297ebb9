//! Sample stock list loaded at startup when no seed file is given.

use chrono::NaiveDate;

use aanya_core::ItemId;

use crate::item::Item;
use crate::size::SizeStock;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn sample_items() -> Vec<Item> {
    vec![
        Item::from_parts(
            ItemId::new(1),
            "Floral Coord Set",
            "Coord Sets",
            2499,
            "Pink",
            SizeStock::from_quantities([5, 8, 12, 3, 2]),
            date(2025, 9, 10),
        ),
        Item::from_parts(
            ItemId::new(2),
            "Cotton Kurti",
            "Cotton Wear",
            1299,
            "Blue",
            SizeStock::from_quantities([15, 20, 8, 5, 0]),
            date(2025, 9, 8),
        ),
        Item::from_parts(
            ItemId::new(3),
            "Embroidered Anarkali",
            "Festive Wear",
            4999,
            "Red",
            SizeStock::from_quantities([2, 4, 6, 1, 1]),
            date(2025, 9, 5),
        ),
        Item::from_parts(
            ItemId::new(4),
            "Palazzo Coord Set",
            "Coord Sets",
            1899,
            "White",
            SizeStock::from_quantities([10, 15, 5, 8, 3]),
            date(2025, 9, 12),
        ),
        Item::from_parts(
            ItemId::new(5),
            "Cotton Straight Pants",
            "Cotton Wear",
            899,
            "Black",
            SizeStock::from_quantities([0, 2, 7, 12, 4]),
            date(2025, 9, 1),
        ),
    ]
}
