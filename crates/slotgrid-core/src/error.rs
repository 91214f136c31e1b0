//! Slotgrid error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for cell accessors.
pub type BoundsResult<T> = Result<T, BoundsError>;

/// Result type alias for allocation rounds.
pub type AllocationResult<T> = Result<T, AllocationError>;

/// Result type alias for plan loading.
pub type PlanResult<T> = Result<T, PlanError>;

/// A cell address outside the current grid shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("this entry/slot does not exist: entry:{entry} slot:{slot}")]
pub struct BoundsError {
    pub entry: usize,
    pub slot: usize,
}

/// A grid whose rows do not all hold `slot_count` slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("entry {entry} has {len} slots, expected {expected}")]
pub struct ShapeError {
    pub entry: usize,
    pub len: usize,
    pub expected: usize,
}

/// Errors raised while resolving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("could not allocate slot {slot}: no enabled entry")]
    NoCandidates { slot: usize },

    #[error("could not allocate slot {slot}: candidate entry {entry} does not exist")]
    MissingEntry { entry: usize, slot: usize },
}

impl AllocationError {
    /// The column that could not be resolved.
    pub fn slot(&self) -> usize {
        match self {
            AllocationError::NoCandidates { slot } => *slot,
            AllocationError::MissingEntry { slot, .. } => *slot,
        }
    }
}

/// Errors that can occur while loading an allocation plan.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read plan {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse plan: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize plan: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid plan: {0}")]
    Invalid(String),
}

/// Any error produced by grid operations.
#[derive(Debug, Error)]
pub enum GridError {
    #[error(transparent)]
    Bounds(#[from] BoundsError),

    #[error(transparent)]
    Allocation(#[from] AllocationError),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

pub type GridResult<T> = Result<T, GridError>;
