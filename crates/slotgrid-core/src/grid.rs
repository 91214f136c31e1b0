//! The allocation grid: `entry_count × slot_count` cells plus per-entry
//! weight and counter.
//!
//! Entries live in one owned `Vec` and are always addressed by index.
//! Every shape change rebuilds the affected slot sequences, so all entries
//! share the same slot count.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BoundsError, BoundsResult, ShapeError};
use crate::types::{Entry, EntryConfig, Slot};

/// Entries × slots allocation grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    entries: Vec<Entry>,
    slot_count: usize,
}

/// Unchecked wire form of [`Grid`].
#[derive(Deserialize)]
struct GridRepr {
    entries: Vec<Entry>,
    slot_count: usize,
}

impl TryFrom<GridRepr> for Grid {
    type Error = ShapeError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        if let Some((entry, e)) = repr
            .entries
            .iter()
            .enumerate()
            .find(|(_, e)| e.slots.len() != repr.slot_count)
        {
            return Err(ShapeError {
                entry,
                len: e.slots.len(),
                expected: repr.slot_count,
            });
        }
        Ok(Self {
            entries: repr.entries,
            slot_count: repr.slot_count,
        })
    }
}

impl Grid {
    /// An empty grid: no entries, no slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortcut for `set_entry_count` followed by `set_slot_count`.
    pub fn with_shape(entry_count: usize, slot_count: usize) -> Self {
        let mut grid = Self::new();
        grid.set_entry_count(entry_count);
        grid.set_slot_count(slot_count);
        grid
    }

    // ── Shape ──────────────────────────────────────────────────────

    /// Replace the entry sequence with `count` fresh entries.
    ///
    /// Fresh entries have no slots; call `set_slot_count` afterwards.
    /// Until then `slot_count()` still reports the previous count while no
    /// cell exists.
    pub fn set_entry_count(&mut self, count: usize) {
        self.entries = (0..count).map(|_| Entry::default()).collect();
        debug!(entries = count, "entry count set");
    }

    /// Rebuild every entry's slot sequence with `count` default slots.
    ///
    /// Prior slot values and flags are discarded unconditionally.
    pub fn set_slot_count(&mut self, count: usize) {
        for entry in &mut self.entries {
            entry.slots = vec![Slot::default(); count];
        }
        self.slot_count = count;
        debug!(slots = count, entries = self.entries.len(), "slot count set");
    }

    /// Configure the whole grid from a list of entry descriptions.
    ///
    /// Cell `(i, j)` ends up with value 0, enabled unless `j` is listed in
    /// `configs[i].disable`. Disabled indices outside `0..slot_count` are
    /// ignored.
    pub fn set_entries(&mut self, configs: &[EntryConfig], slot_count: usize) {
        self.set_entry_count(configs.len());
        self.set_slot_count(slot_count);
        for (entry, config) in self.entries.iter_mut().zip(configs) {
            entry.id = config.id.clone();
            entry.weight = config.weight;
        }
        self.feed(|entry: usize, slot: usize| Slot {
            value: 0,
            enabled: !configs[entry].disable.contains(&slot),
        });
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    // ── Entries ────────────────────────────────────────────────────

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, entry: usize) -> Option<&Entry> {
        self.entries.get(entry)
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [Entry] {
        &mut self.entries
    }

    /// Set the opaque id of an entry.
    pub fn set_entry_id(&mut self, entry: usize, id: Option<String>) -> BoundsResult<()> {
        self.entry_mut(entry)?.id = id;
        Ok(())
    }

    /// Set the credit-accrual rate of an entry.
    pub fn set_entry_weight(&mut self, entry: usize, weight: u32) -> BoundsResult<()> {
        self.entry_mut(entry)?.weight = weight;
        Ok(())
    }

    fn entry_mut(&mut self, entry: usize) -> BoundsResult<&mut Entry> {
        self.entries
            .get_mut(entry)
            .ok_or(BoundsError { entry, slot: 0 })
    }

    /// Zero every counter, keeping cells untouched.
    pub fn reset_counters(&mut self) {
        for entry in &mut self.entries {
            entry.counter = 0;
        }
    }

    /// Zero every cell value, keeping enabled flags untouched.
    pub fn clear_values(&mut self) {
        for slot in self.entries.iter_mut().flat_map(|e| e.slots.iter_mut()) {
            slot.value = 0;
        }
    }

    // ── Cells ──────────────────────────────────────────────────────

    pub fn entry_exists(&self, entry: usize) -> bool {
        entry < self.entries.len()
    }

    pub fn slot_exists(&self, entry: usize, slot: usize) -> bool {
        self.entries
            .get(entry)
            .is_some_and(|e| slot < e.slots.len())
    }

    /// Bounds-checked read access to a cell.
    pub fn entry_slot(&self, entry: usize, slot: usize) -> BoundsResult<&Slot> {
        self.entries
            .get(entry)
            .and_then(|e| e.slots.get(slot))
            .ok_or(BoundsError { entry, slot })
    }

    fn entry_slot_mut(&mut self, entry: usize, slot: usize) -> BoundsResult<&mut Slot> {
        self.entries
            .get_mut(entry)
            .and_then(|e| e.slots.get_mut(slot))
            .ok_or(BoundsError { entry, slot })
    }

    /// Make the cell eligible for allocation.
    pub fn enable_slot(&mut self, entry: usize, slot: usize) -> BoundsResult<()> {
        self.entry_slot_mut(entry, slot)?.enabled = true;
        Ok(())
    }

    /// Exclude the entry from this column.
    pub fn disable_slot(&mut self, entry: usize, slot: usize) -> BoundsResult<()> {
        self.entry_slot_mut(entry, slot)?.enabled = false;
        Ok(())
    }

    pub fn set_slot_value(&mut self, entry: usize, slot: usize, value: i64) -> BoundsResult<()> {
        self.entry_slot_mut(entry, slot)?.value = value;
        Ok(())
    }

    pub fn clear_slot(&mut self, entry: usize, slot: usize) -> BoundsResult<()> {
        self.set_slot_value(entry, slot, 0)
    }

    pub fn slot_value(&self, entry: usize, slot: usize) -> BoundsResult<i64> {
        Ok(self.entry_slot(entry, slot)?.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.entry_count(), 0);
        assert_eq!(grid.slot_count(), 0);
        assert!(grid.entries().is_empty());
    }

    #[test]
    fn set_entry_count_creates_fresh_entries() {
        let mut grid = Grid::new();
        grid.set_entry_count(1);
        assert_eq!(grid.entry_count(), 1);
        assert_eq!(grid.entries()[0], Entry::default());
    }

    #[test]
    fn set_slot_count_sizes_every_entry() {
        for n in 0..4 {
            for m in 0..5 {
                let grid = Grid::with_shape(n, m);
                assert_eq!(grid.entry_count(), n);
                assert_eq!(grid.slot_count(), m);
                for e in grid.entries() {
                    assert_eq!(e.slots.len(), m);
                    assert!(e.slots.iter().all(|s| s.enabled && s.value == 0));
                }
            }
        }
    }

    #[test]
    fn slot_count_without_entries_is_recorded() {
        let mut grid = Grid::new();
        grid.set_slot_count(4);
        assert_eq!(grid.slot_count(), 4);
        assert!(!grid.slot_exists(0, 0));
    }

    #[test]
    fn slot_count_is_stale_until_slots_rebuilt() {
        let mut grid = Grid::new();
        grid.set_slot_count(4);
        grid.set_entry_count(3);

        assert_eq!(grid.slot_count(), 4);
        assert!(!grid.slot_exists(0, 0));
        assert_eq!(grid.render(), "\n\n");

        grid.set_slot_count(4);
        assert!(grid.slot_exists(2, 3));
        assert_eq!(grid.render(), "0 0 0 0\n0 0 0 0\n0 0 0 0");
    }

    #[test]
    fn resize_discards_slot_state() {
        let mut grid = Grid::with_shape(2, 3);
        grid.set_slot_value(1, 2, 7).unwrap();
        grid.disable_slot(0, 0).unwrap();

        grid.set_slot_count(3);

        assert_eq!(grid.slot_value(1, 2).unwrap(), 0);
        assert!(grid.entry_slot(0, 0).unwrap().enabled);
    }

    #[test]
    fn set_slot_values() {
        let mut grid = Grid::with_shape(3, 6);
        grid.set_slot_value(0, 0, 1).unwrap();
        grid.set_slot_value(2, 5, 1).unwrap();
        grid.set_slot_value(1, 2, 1).unwrap();
        grid.set_slot_value(1, 0, 1).unwrap();
        grid.set_slot_value(0, 4, 1).unwrap();

        assert_eq!(grid.entry_slot(0, 0).unwrap().value, 1);
        assert_eq!(grid.entry_slot(0, 1).unwrap().value, 0);
        assert_eq!(grid.entry_slot(0, 2).unwrap().value, 0);
        assert_eq!(grid.entry_slot(0, 3).unwrap().value, 0);
        assert_eq!(grid.entry_slot(0, 4).unwrap().value, 1);
        assert_eq!(
            grid.entry_slot(0, 14),
            Err(BoundsError { entry: 0, slot: 14 })
        );
    }

    #[test]
    fn accessors_reject_out_of_range() {
        let mut grid = Grid::with_shape(2, 2);
        let oob = BoundsError { entry: 2, slot: 0 };
        assert_eq!(grid.enable_slot(2, 0), Err(oob));
        assert_eq!(grid.disable_slot(2, 0), Err(oob));
        assert_eq!(grid.set_slot_value(2, 0, 1), Err(oob));
        assert_eq!(grid.clear_slot(2, 0), Err(oob));
        assert_eq!(grid.slot_value(2, 0), Err(oob));
        assert_eq!(grid.slot_value(0, 2), Err(BoundsError { entry: 0, slot: 2 }));
        assert_eq!(grid.set_entry_weight(5, 1), Err(BoundsError { entry: 5, slot: 0 }));
    }

    #[test]
    fn enable_disable_and_clear() {
        let mut grid = Grid::with_shape(1, 2);
        grid.disable_slot(0, 1).unwrap();
        assert!(!grid.entry_slot(0, 1).unwrap().enabled);
        grid.enable_slot(0, 1).unwrap();
        assert!(grid.entry_slot(0, 1).unwrap().enabled);

        grid.set_slot_value(0, 0, 9).unwrap();
        grid.clear_slot(0, 0).unwrap();
        assert_eq!(grid.slot_value(0, 0).unwrap(), 0);
    }

    #[test]
    fn existence_predicates() {
        let grid = Grid::with_shape(3, 6);
        assert!(grid.entry_exists(0));
        assert!(grid.entry_exists(2));
        assert!(!grid.entry_exists(3));
        assert!(grid.slot_exists(2, 5));
        assert!(!grid.slot_exists(2, 6));
        assert!(!grid.slot_exists(3, 0));
    }

    #[test]
    fn set_entries_copies_configuration() {
        let mut grid = Grid::new();
        grid.set_entries(
            &[
                EntryConfig::new("1", 2),
                EntryConfig::new("2", 1).disabled([0, 3]),
                EntryConfig::default(),
            ],
            4,
        );

        assert_eq!(grid.entry_count(), 3);
        assert_eq!(grid.slot_count(), 4);
        assert_eq!(grid.entries()[0].id.as_deref(), Some("1"));
        assert_eq!(grid.entries()[1].id.as_deref(), Some("2"));
        assert_eq!(grid.entries()[2].id, None);
        assert_eq!(grid.entries()[0].weight, 2);
        assert_eq!(grid.entries()[1].weight, 1);
        assert_eq!(grid.entries()[2].weight, 0);

        let enabled: Vec<bool> = (0..4)
            .map(|s| grid.entry_slot(1, s).unwrap().enabled)
            .collect();
        assert_eq!(enabled, vec![false, true, true, false]);
    }

    #[test]
    fn set_entries_ignores_out_of_range_disable() {
        let mut grid = Grid::new();
        grid.set_entries(&[EntryConfig::new("a", 1).disabled([1, 40])], 2);
        assert!(grid.entry_slot(0, 0).unwrap().enabled);
        assert!(!grid.entry_slot(0, 1).unwrap().enabled);
    }

    #[test]
    fn reset_counters_and_clear_values() {
        let mut grid = Grid::with_shape(2, 2);
        grid.entries_mut()[0].counter = 5;
        grid.set_slot_value(1, 1, 3).unwrap();
        grid.disable_slot(1, 0).unwrap();

        grid.reset_counters();
        assert!(grid.entries().iter().all(|e| e.counter == 0));
        assert_eq!(grid.slot_value(1, 1).unwrap(), 3);

        grid.clear_values();
        assert_eq!(grid.slot_value(1, 1).unwrap(), 0);
        assert!(!grid.entry_slot(1, 0).unwrap().enabled);
    }
}
