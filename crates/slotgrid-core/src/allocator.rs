//! Weighted round-robin allocation.
//!
//! Columns are resolved one at a time, left to right. For each column:
//!
//! ```text
//! candidates = entries whose slot at this column is enabled
//! if candidates is empty: fail (earlier columns stay mutated)
//! winner     = max counter, lowest entry index on ties
//! winner     -> cell = fill, counter = 0
//! others     -> counter += weight
//! ```
//!
//! Counters carry over from column to column and from round to round, so
//! an entry that keeps losing accrues credit at its weight's rate until it
//! outranks the rest. Disabled entries are left untouched for that column.

use tracing::{debug, warn};

use crate::error::{AllocationError, AllocationResult};
use crate::grid::Grid;
use crate::types::Candidate;

/// Fill value used by [`Grid::process_default`].
pub const DEFAULT_FILL: i64 = 1;

impl Grid {
    /// Ranked candidates for a column: descending counter, then ascending
    /// entry index.
    ///
    /// Returns an empty list if no entry is enabled for `slot` or if `slot`
    /// is out of range.
    pub fn slot_column(&self, slot: usize) -> Vec<Candidate> {
        let mut column: Vec<Candidate> = self
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.slots.get(slot).is_some_and(|s| s.enabled))
            .map(|(entry, e)| Candidate {
                entry,
                counter: e.counter,
            })
            .collect();

        column.sort_by(|a, b| b.counter.cmp(&a.counter).then(a.entry.cmp(&b.entry)));
        column
    }

    /// Run one allocation round, writing `fill` into each column's winning
    /// cell.
    ///
    /// Returns the winning entry index for every column, in column order.
    /// Fails at the first column with no enabled entry. Columns resolved
    /// before the failure keep their mutations.
    pub fn process(&mut self, fill: i64) -> AllocationResult<Vec<usize>> {
        let slot_count = self.slot_count();
        let mut winners = Vec::with_capacity(slot_count);

        for slot in 0..slot_count {
            let column = self.slot_column(slot);
            let Some(winner) = column.first().map(|c| c.entry) else {
                warn!(slot, "no enabled entry for slot");
                return Err(AllocationError::NoCandidates { slot });
            };

            for (rank, candidate) in column.iter().enumerate() {
                let entry = self
                    .entries_mut()
                    .get_mut(candidate.entry)
                    .ok_or(AllocationError::MissingEntry {
                        entry: candidate.entry,
                        slot,
                    })?;

                if rank == 0 {
                    let cell = entry.slots.get_mut(slot).ok_or(AllocationError::MissingEntry {
                        entry: candidate.entry,
                        slot,
                    })?;
                    cell.value = fill;
                    entry.counter = 0;
                } else {
                    entry.counter = entry.counter.saturating_add(u64::from(entry.weight));
                }
            }

            debug!(
                slot,
                winner,
                candidates = column.len(),
                "slot allocated"
            );
            winners.push(winner);
        }

        Ok(winners)
    }

    /// [`Grid::process`] with [`DEFAULT_FILL`].
    pub fn process_default(&mut self) -> AllocationResult<Vec<usize>> {
        self.process(DEFAULT_FILL)
    }
}
