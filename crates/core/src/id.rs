//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an inventory item.
///
/// Plain integer ids keep the seed data and exports readable; uniqueness is
/// guaranteed by [`IdGenerator`], not by the id space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for u64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("ItemId: {e}")))?;
        Ok(Self(value))
    }
}

/// Monotonic id source.
///
/// Hands out strictly increasing ids, so rapid successive creates can never
/// collide (unlike wall-clock derived ids).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Start a generator whose first id is `1`.
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Start a generator whose ids are all greater than `max` (if any).
    pub fn after(max: Option<ItemId>) -> Self {
        Self {
            last: max.map(|id| id.0).unwrap_or(0),
        }
    }

    /// Allocate the next id, or `None` once the id space is used up.
    pub fn next_id(&mut self) -> Option<ItemId> {
        let next = self.last.checked_add(1)?;
        self.last = next;
        Some(ItemId(next))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
