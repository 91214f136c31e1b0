//! Bulk cell initialization.

use crate::grid::Grid;
use crate::types::Slot;

/// Per-cell strategy used by [`Grid::feed`].
///
/// Implemented for any `Fn(usize, usize) -> Slot`, so closures work
/// directly; implement it on a struct when the strategy carries state.
pub trait CellFeeder {
    /// Compute the value and enabled flag for cell `(entry, slot)`.
    fn compute(&self, entry: usize, slot: usize) -> Slot;
}

impl<F> CellFeeder for F
where
    F: Fn(usize, usize) -> Slot,
{
    fn compute(&self, entry: usize, slot: usize) -> Slot {
        self(entry, slot)
    }
}

impl Grid {
    /// Overwrite every cell with the feeder's result.
    ///
    /// Cells are visited row-major: all columns of entry 0 in ascending
    /// order, then entry 1, and so on. Each cell is visited exactly once.
    pub fn feed<F: CellFeeder>(&mut self, feeder: F) {
        for (entry_idx, entry) in self.entries_mut().iter_mut().enumerate() {
            for (slot_idx, slot) in entry.slots.iter_mut().enumerate() {
                *slot = feeder.compute(entry_idx, slot_idx);
            }
        }
    }
}
