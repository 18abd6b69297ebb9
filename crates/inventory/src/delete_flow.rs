use aanya_core::ItemId;

/// Two-step delete: stage an id, then confirm or cancel.
///
/// Only [`DeleteFlow::confirm`] hands out an id to remove; the caller performs
/// the removal itself.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum DeleteFlow {
    #[default]
    Idle,
    PendingDelete(ItemId),
}

impl DeleteFlow {
    /// Stage `id` for deletion, replacing any earlier pending id.
    pub fn request(&mut self, id: ItemId) {
        *self = DeleteFlow::PendingDelete(id);
    }

    /// Leave the pending state, returning the id to remove (if any).
    pub fn confirm(&mut self) -> Option<ItemId> {
        match core::mem::take(self) {
            DeleteFlow::PendingDelete(id) => Some(id),
            DeleteFlow::Idle => None,
        }
    }

    /// Drop the pending id without removing anything.
    pub fn cancel(&mut self) {
        *self = DeleteFlow::Idle;
    }

    pub fn pending(&self) -> Option<ItemId> {
        match self {
            DeleteFlow::PendingDelete(id) => Some(*id),
            DeleteFlow::Idle => None,
        }
    }
}
