//! Plain-text rendering of items, counters and notices.

use std::io::{self, Write};

use aanya_inventory::{Item, Notice, NoticeKind, StockSummary};

/// Price with thousands separators, e.g. `₹2,499`.
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{grouped}")
}

pub fn write_item(out: &mut impl Write, item: &Item) -> io::Result<()> {
    writeln!(
        out,
        "#{:<4} {}  [{}]  {}  Color: {}  Units: {}",
        item.id(),
        item.name(),
        item.category(),
        format_price(item.price()),
        item.color(),
        item.stock().total()
    )?;
    let sizes: Vec<String> = item
        .size_levels()
        .map(|(size, quantity, level)| format!("{size}:{quantity}({level})"))
        .collect();
    writeln!(out, "      {}", sizes.join("  "))
}

pub fn write_items(out: &mut impl Write, items: &[&Item]) -> io::Result<()> {
    if items.is_empty() {
        writeln!(out, "No items found")?;
        return writeln!(
            out,
            "Try adjusting your search or filter criteria, or add a new item."
        );
    }
    for item in items {
        write_item(out, item)?;
    }
    Ok(())
}

pub fn write_summary(out: &mut impl Write, summary: &StockSummary) -> io::Result<()> {
    writeln!(
        out,
        "Total items: {}  Low stock: {}  Out of stock: {}",
        summary.total_items, summary.low_stock_count, summary.out_of_stock_count
    )
}

pub fn write_notice(out: &mut impl Write, notice: &Notice) -> io::Result<()> {
    let tag = match notice.kind {
        NoticeKind::Success => "ok",
        NoticeKind::Error => "error",
    };
    writeln!(out, "[{tag}] {}", notice.message)
}
