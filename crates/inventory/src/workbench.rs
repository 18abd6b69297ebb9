//! Session state behind the stock screen.
//!
//! A presentation layer drives a [`Workbench`]: it forwards user actions
//! (typing in the search box, switching tabs, submitting the item form,
//! confirming a delete) and re-renders from the plain data returned. Every
//! call completes before the next, so the screen never sees a half-applied
//! change.

use aanya_core::{Clock, DomainResult, ItemId, SystemClock};

use crate::delete_flow::DeleteFlow;
use crate::export::{CsvExport, ExportOptions, export_csv_with};
use crate::form::ItemForm;
use crate::item::Item;
use crate::query::{CategoryFilter, FilterState, StockFilter};
use crate::service::Inventory;
use crate::summary::StockSummary;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }

    /// Notice for an export attempt; `Ok` carries the number of items written.
    pub fn from_export<E: core::fmt::Display>(outcome: &Result<usize, E>) -> Self {
        match outcome {
            Ok(rows) => Self::success(format!("Stock data exported successfully! ({rows} items)")),
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                Self::error("Export failed. Please try again.")
            }
        }
    }
}

/// State of the add/edit dialog.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Closed,
    Adding,
    Editing(ItemId),
}

#[derive(Debug)]
pub struct Workbench<C = SystemClock> {
    inventory: Inventory<C>,
    filter: FilterState,
    editor: EditorMode,
    delete: DeleteFlow,
    export_options: ExportOptions,
}

impl<C: Clock> Workbench<C> {
    pub fn new(inventory: Inventory<C>) -> Self {
        Self {
            inventory,
            filter: FilterState::default(),
            editor: EditorMode::Closed,
            delete: DeleteFlow::Idle,
            export_options: ExportOptions::default(),
        }
    }

    pub fn with_export_options(mut self, options: ExportOptions) -> Self {
        self.export_options = options;
        self
    }

    pub fn inventory(&self) -> &Inventory<C> {
        &self.inventory
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn editor(&self) -> EditorMode {
        self.editor
    }

    pub fn pending_delete(&self) -> Option<ItemId> {
        self.delete.pending()
    }

    // Filters.

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.search = query.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    pub fn set_stock_filter(&mut self, stock: StockFilter) {
        self.filter.stock = stock;
    }

    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
    }

    /// Items to render under the current filters.
    pub fn visible_items(&self) -> Vec<&Item> {
        self.inventory.filtered(&self.filter)
    }

    /// Counters over the whole store; filters do not apply.
    pub fn summary(&self) -> StockSummary {
        self.inventory.summary()
    }

    pub fn categories(&self) -> Vec<&str> {
        self.inventory.store().categories()
    }

    // Add/edit dialog.

    pub fn open_add(&mut self) -> ItemForm {
        self.editor = EditorMode::Adding;
        ItemForm::blank()
    }

    /// Open the dialog prefilled with an item. `None` if the item is gone.
    pub fn open_edit(&mut self, id: ItemId) -> Option<ItemForm> {
        let form = ItemForm::from_item(self.inventory.find_by_id(id)?);
        self.editor = EditorMode::Editing(id);
        Some(form)
    }

    pub fn close_editor(&mut self) {
        self.editor = EditorMode::Closed;
    }

    /// Save the dialog: update when editing, add when adding.
    ///
    /// A blank name or category keeps the dialog open with an error notice.
    /// Submitting with the dialog closed changes nothing.
    pub fn submit(&mut self, form: &ItemForm) -> Notice {
        if self.editor == EditorMode::Closed {
            tracing::debug!("submit ignored: editor closed");
            return Notice::error("No item form is open.");
        }
        if form.name.trim().is_empty() {
            return Notice::error("Please enter an item name.");
        }
        if form.category.trim().is_empty() {
            return Notice::error("Please select a category.");
        }

        let draft = form.to_draft();
        let notice = match self.editor {
            EditorMode::Editing(id) => {
                if self.inventory.update(id, draft) {
                    Notice::success("Item updated successfully!")
                } else {
                    Notice::error("This item no longer exists.")
                }
            }
            EditorMode::Adding => {
                self.inventory.create(draft);
                Notice::success("New item added successfully!")
            }
            EditorMode::Closed => return Notice::error("No item form is open."),
        };

        self.close_editor();
        notice
    }

    // Delete confirmation.

    pub fn request_delete(&mut self, id: ItemId) {
        self.delete.request(id);
    }

    /// Remove the staged item. `None` when nothing was staged or it was already gone.
    pub fn confirm_delete(&mut self) -> Option<Notice> {
        let id = self.delete.confirm()?;
        self.inventory
            .delete(id)
            .map(|_| Notice::success("Item deleted successfully!"))
    }

    pub fn cancel_delete(&mut self) {
        self.delete.cancel();
    }

    // Export.

    /// Render the whole store (ignoring filters) as CSV dated today.
    pub fn export(&self) -> DomainResult<CsvExport> {
        export_csv_with(
            self.inventory.store(),
            self.inventory.clock().today(),
            &self.export_options,
        )
    }
}
