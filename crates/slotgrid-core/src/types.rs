//! Entry and slot types shared by the grid, feeder and allocator.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One cell of the grid: an entry's slot at a given column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Payload written by the allocator or by a feeder.
    pub value: i64,
    /// An entry with a disabled slot is never selected for that column.
    pub enabled: bool,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            value: 0,
            enabled: true,
        }
    }
}

/// A weighted competitor for slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Caller-assigned, never inspected by the allocator.
    pub id: Option<String>,
    /// Credit gained for every column this entry competes for and loses.
    /// Whole, non-negative credit units only; scale fractional rates
    /// (e.g. 0.5 and 1.5 become 1 and 3).
    pub weight: u32,
    /// Accrued credit. Reset to zero when the entry wins a column.
    pub counter: u64,
    pub slots: Vec<Slot>,
}

/// Declarative description of one entry, consumed by `Grid::set_entries`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryConfig {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub weight: u32,
    /// Column indices this entry is ineligible for.
    #[serde(default)]
    pub disable: BTreeSet<usize>,
}

impl EntryConfig {
    pub fn new(id: impl Into<String>, weight: u32) -> Self {
        Self {
            id: Some(id.into()),
            weight,
            disable: BTreeSet::new(),
        }
    }

    /// Builder-style helper to mark columns as ineligible.
    pub fn disabled(mut self, slots: impl IntoIterator<Item = usize>) -> Self {
        self.disable.extend(slots);
        self
    }
}

/// An eligible entry for a column, as ranked by the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub entry: usize,
    pub counter: u64,
}
