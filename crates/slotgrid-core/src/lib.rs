//! slotgrid-core — weighted slot allocation.
//!
//! A fixed set of weighted entries competes for a fixed number of
//! recurring slots. Each allocation round resolves every column of the
//! grid, picking the entry with the most accrued credit; losers gain
//! credit at their weight's rate. Entries can be excluded from individual
//! columns.
//!
//! # Components
//!
//! - **`grid`** — Entries × slots container, shape and cell accessors
//! - **`feeder`** — Bulk cell initialization from a per-cell strategy
//! - **`allocator`** — The weighted round-robin `process` round
//! - **`render`** — Deterministic text dump of the grid
//! - **`plan`** — `slotgrid.toml` declarative plan files
//!
//! ```
//! use slotgrid_core::{EntryConfig, Grid};
//!
//! let mut grid = Grid::new();
//! grid.set_entries(
//!     &[EntryConfig::new("a", 2), EntryConfig::new("b", 1), EntryConfig::new("c", 1)],
//!     4,
//! );
//! grid.process(1).unwrap();
//! assert_eq!(grid.render(), "1 0 1 0\n0 1 0 0\n0 0 0 1");
//! ```

pub mod allocator;
pub mod error;
pub mod feeder;
pub mod grid;
pub mod plan;
pub mod render;
pub mod types;

pub use allocator::DEFAULT_FILL;
pub use error::{
    AllocationError, AllocationResult, BoundsError, BoundsResult, GridError, GridResult,
    PlanError, PlanResult, ShapeError,
};
pub use feeder::CellFeeder;
pub use grid::Grid;
pub use plan::{AllocationPlan, GridSection, PlanEntry};
pub use render::DISABLED_TOKEN;
pub use types::{Candidate, Entry, EntryConfig, Slot};
