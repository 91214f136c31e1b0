//! `slotgrid.toml` allocation plan parser.
//!
//! ```toml
//! [grid]
//! slots = 12
//! fill = 1
//!
//! [[entry]]
//! id = "alice"
//! weight = 2
//! disable = [0, 1, 2]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::allocator::DEFAULT_FILL;
use crate::error::{PlanError, PlanResult};
use crate::grid::Grid;
use crate::types::EntryConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationPlan {
    pub grid: GridSection,
    #[serde(default, rename = "entry")]
    pub entries: Vec<PlanEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSection {
    pub slots: usize,
    #[serde(default = "default_fill")]
    pub fill: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub disable: Vec<usize>,
}

fn default_fill() -> i64 {
    DEFAULT_FILL
}

impl AllocationPlan {
    pub fn from_file(path: &Path) -> PlanResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let plan = Self::from_toml_str(&content)?;
        debug!(?path, entries = plan.entries.len(), slots = plan.grid.slots, "plan loaded");
        Ok(plan)
    }

    pub fn from_toml_str(content: &str) -> PlanResult<Self> {
        let plan: AllocationPlan = toml::from_str(content)?;
        plan.validate()?;
        Ok(plan)
    }

    pub fn to_toml_string(&self) -> PlanResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject disabled columns that fall outside the grid.
    pub fn validate(&self) -> PlanResult<()> {
        for (idx, entry) in self.entries.iter().enumerate() {
            if let Some(slot) = entry.disable.iter().find(|s| **s >= self.grid.slots) {
                return Err(PlanError::Invalid(format!(
                    "entry {idx} disables slot {slot}, but the grid has {} slots",
                    self.grid.slots
                )));
            }
        }
        Ok(())
    }

    pub fn entry_configs(&self) -> Vec<EntryConfig> {
        self.entries
            .iter()
            .map(|e| EntryConfig {
                id: e.id.clone(),
                weight: e.weight,
                disable: e.disable.iter().copied().collect(),
            })
            .collect()
    }

    /// A grid configured through `Grid::set_entries`.
    pub fn build_grid(&self) -> Grid {
        let mut grid = Grid::new();
        grid.set_entries(&self.entry_configs(), self.grid.slots);
        grid
    }

    /// Columns in which every entry is disabled.
    pub fn unsatisfiable_slots(&self) -> Vec<usize> {
        (0..self.grid.slots)
            .filter(|slot| self.entries.iter().all(|e| e.disable.contains(slot)))
            .collect()
    }

    /// Scaffold a plan with `entries` equally weighted, fully enabled entries.
    pub fn scaffold(entries: usize, slots: usize) -> Self {
        AllocationPlan {
            grid: GridSection {
                slots,
                fill: DEFAULT_FILL,
            },
            entries: (0..entries)
                .map(|i| PlanEntry {
                    id: Some(format!("entry-{}", i + 1)),
                    weight: 1,
                    disable: Vec::new(),
                })
                .collect(),
        }
    }
}
