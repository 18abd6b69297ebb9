//! CSV export of the whole store.
//!
//! Every field is double-quoted and embedded quotes are doubled (RFC 4180).
//! Rows are joined with `\n` without a trailing newline.

use core::fmt::Write as _;

use chrono::NaiveDate;

use aanya_core::{DomainError, DomainResult};

use crate::size::Size;
use crate::store::ItemStore;

/// Column headers, in output order.
pub const HEADERS: [&str; 10] = [
    "Name",
    "Category",
    "Price",
    "Color",
    "Stock M",
    "Stock L",
    "Stock XL",
    "Stock XXL",
    "Stock XXXL",
    "Date Added",
];

/// Default filename prefix for exports.
pub const DEFAULT_FILENAME_PREFIX: &str = "aanya-selections-stock";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub filename_prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            filename_prefix: DEFAULT_FILENAME_PREFIX.to_string(),
        }
    }
}

/// Rendered export: CSV text plus a suggested filename. Delivery is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub content: String,
    pub filename: String,
    /// Number of data rows (items).
    pub rows: usize,
}

pub fn export_csv(store: &ItemStore, date: NaiveDate) -> DomainResult<CsvExport> {
    export_csv_with(store, date, &ExportOptions::default())
}

pub fn export_csv_with(
    store: &ItemStore,
    date: NaiveDate,
    options: &ExportOptions,
) -> DomainResult<CsvExport> {
    let mut content = String::new();
    render(store, &mut content).map_err(|e| DomainError::export(e.to_string()))?;

    let export = CsvExport {
        content,
        filename: format!("{}-{}.csv", options.filename_prefix, date.format("%Y-%m-%d")),
        rows: store.len(),
    };
    tracing::info!(rows = export.rows, filename = %export.filename, "stock exported");
    Ok(export)
}

fn render(store: &ItemStore, out: &mut String) -> core::fmt::Result {
    write_row(out, HEADERS.iter().map(|h| h.to_string()))?;

    for item in store.iter() {
        out.push('\n');
        let mut fields = vec![
            item.name().to_string(),
            item.category().to_string(),
            item.price().to_string(),
            item.color().to_string(),
        ];
        fields.extend(Size::ALL.iter().map(|size| item.stock().get(*size).to_string()));
        fields.push(item.date_added().format("%Y-%m-%d").to_string());
        write_row(out, fields.into_iter())?;
    }
    Ok(())
}

fn write_row(out: &mut String, fields: impl Iterator<Item = String>) -> core::fmt::Result {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(',');
        }
        write!(out, "\"{}\"", field.replace('"', "\"\""))?;
    }
    Ok(())
}
