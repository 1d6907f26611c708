// engine.rs - The authoritative current generation and its transitions

use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::error::LifeError;
use crate::grid::{Cell, Grid, GridSize};
use crate::patterns::Pattern;

/// An immutable, published generation.
///
/// Cloning is cheap. The grid behind a snapshot never changes, even if the
/// engine is toggled or advanced afterwards, so a renderer can hold one for
/// as long as it likes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub generation: u64,
    pub grid: Arc<Grid>,
}

impl Deref for Snapshot {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        &self.grid
    }
}

struct Current {
    generation: u64,
    grid: Arc<Grid>,
}

/// Owns the current generation. Every mutation path goes through one lock,
/// so a toggle can never interleave with the computation of a successor.
pub struct GridEngine {
    current: Mutex<Current>,
}

impl GridEngine {
    pub fn new(size: GridSize) -> Self {
        Self::with_grid(Grid::new(size))
    }

    pub fn with_grid(grid: Grid) -> Self {
        Self {
            current: Mutex::new(Current {
                generation: 0,
                grid: Arc::new(grid),
            }),
        }
    }

    // A panic while holding the lock cannot leave a half-built grid behind:
    // successors are swapped in whole. The inner value is always usable.
    fn lock(&self) -> MutexGuard<'_, Current> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn size(&self) -> GridSize {
        self.lock().grid.size()
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    pub fn snapshot(&self) -> Snapshot {
        let current = self.lock();
        Snapshot {
            generation: current.generation,
            grid: Arc::clone(&current.grid),
        }
    }

    /// Flips one cell of the current generation.
    pub fn toggle_cell(&self, col: usize, row: usize) -> Result<Cell, LifeError> {
        let mut current = self.lock();
        // Copy-on-write: outstanding snapshots keep the old grid.
        match Arc::make_mut(&mut current.grid).toggle(col, row) {
            Ok(cell) => {
                debug!(col, row, ?cell, "toggled cell");
                Ok(cell)
            }
            Err(err) => {
                warn!(%err, "toggle rejected");
                Err(err)
            }
        }
    }

    /// Replaces the current generation with its successor and returns it.
    pub fn advance(&self) -> Snapshot {
        let mut current = self.lock();
        let next = Arc::new(current.grid.next_generation());
        current.grid = Arc::clone(&next);
        current.generation += 1;
        debug!(
            generation = current.generation,
            population = next.population(),
            "advanced"
        );
        Snapshot {
            generation: current.generation,
            grid: next,
        }
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&self) {
        self.replace(Grid::new(self.size()));
    }

    /// Clears the grid, then places `pattern` at `origin`.
    pub fn load_pattern(&self, pattern: &Pattern, origin: (usize, usize)) -> Result<Snapshot, LifeError> {
        let mut grid = Grid::new(self.size());
        pattern.place(&mut grid, origin)?;
        debug!(pattern = pattern.name, ?origin, "loaded pattern");
        Ok(self.replace(grid))
    }

    /// Installs `grid` as generation 0. Its size must match the engine's.
    fn replace(&self, grid: Grid) -> Snapshot {
        let mut current = self.lock();
        debug_assert_eq!(grid.size(), current.grid.size());
        current.grid = Arc::new(grid);
        current.generation = 0;
        Snapshot {
            generation: 0,
            grid: Arc::clone(&current.grid),
        }
    }
}
