//! Terminal front-end for the stock list.
//!
//! Stands in for the presentation layer: it forwards user actions to a
//! [`aanya_inventory::Workbench`] and prints what comes back.

pub mod config;
pub mod render;
pub mod shell;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use aanya_inventory::{CsvExport, ItemStore};

pub use config::Config;

/// Load the starting store: the seed file if configured, otherwise the sample list.
pub fn load_store(config: &Config) -> anyhow::Result<ItemStore> {
    match &config.seed_path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read seed file {}", path.display()))?;
            let store = ItemStore::from_json(&json)
                .with_context(|| format!("failed to load seed file {}", path.display()))?;
            tracing::info!(items = store.len(), path = %path.display(), "seed loaded");
            Ok(store)
        }
        None => Ok(ItemStore::sample()),
    }
}

/// Write an export into `dir` under its suggested filename.
pub fn deliver_export(export: &CsvExport, dir: &Path) -> anyhow::Result<PathBuf> {
    let path = dir.join(&export.filename);
    fs::write(&path, &export.content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
