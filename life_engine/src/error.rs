// error.rs - Error types for the generation engine

use thiserror::Error;

/// Errors reported by grid and engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("cell ({col}, {row}) is outside the {width}x{height} grid")]
    OutOfRange {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },

    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),
}

/// Errors reported when validating a [`crate::SimulationConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    ZeroGridSize,

    #[error("grid size {0} exceeds the maximum of {}", crate::config::MAX_GRID_SIZE)]
    GridTooLarge(usize),

    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,
}
