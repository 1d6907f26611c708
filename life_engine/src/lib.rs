//! Conway's Game of Life generation engine.
//!
//! [`GridEngine`] owns the current generation of a bounded (non-wrapping)
//! grid and computes successors; [`SimulationController`] drives it on a
//! fixed cadence on a tokio runtime, or one step at a time.

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod viewport;

pub use config::SimulationConfig;
pub use controller::{SimulationController, SimulationState, StepOutcome};
pub use engine::{GridEngine, Snapshot};
pub use error::{ConfigError, LifeError};
pub use grid::{Cell, Grid, GridSize};
pub use patterns::{PATTERNS, Pattern};
pub use viewport::Viewport;
