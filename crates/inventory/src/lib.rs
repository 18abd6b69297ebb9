//! Inventory state engine for a per-size clothing stock list.
//!
//! This crate contains the in-memory store and the logic around it (filtering,
//! summary counters, mutations, CSV export), implemented as deterministic
//! domain logic (no IO, no rendering). Presentation layers drive it through
//! [`Workbench`].

pub mod delete_flow;
pub mod export;
pub mod form;
pub mod item;
pub mod query;
pub mod seed;
pub mod service;
pub mod size;
pub mod store;
pub mod summary;
pub mod workbench;

pub use delete_flow::DeleteFlow;
pub use export::{CsvExport, DEFAULT_FILENAME_PREFIX, ExportOptions, HEADERS, export_csv, export_csv_with};
pub use form::{ItemForm, parse_lenient};
pub use item::{DEFAULT_COLOR, Item, ItemDraft, StockDraft};
pub use query::{CategoryFilter, FilterState, StockFilter, filter_items};
pub use service::Inventory;
pub use size::{Size, SizeStock, StockLevel};
pub use store::ItemStore;
pub use summary::StockSummary;
pub use workbench::{EditorMode, Notice, NoticeKind, Workbench};
