// patterns.rs - Preset starting patterns, as (col, row) offsets from an origin

use crate::error::LifeError;
use crate::grid::{Cell, Grid, GridSize};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 1), (2, 1), (2, 0), (1, 2), (0, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    },
];

/// Looks up a preset by name, ignoring case.
pub fn find(name: &str) -> Result<&'static Pattern, LifeError> {
    PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))
}

impl Pattern {
    /// Width and height of the pattern's bounding box.
    pub fn bounds(&self) -> GridSize {
        let width = self.cells.iter().map(|&(c, _)| c + 1).max().unwrap_or(0);
        let height = self.cells.iter().map(|&(_, r)| r + 1).max().unwrap_or(0);
        GridSize::new(width, height)
    }

    /// Origin that centres the pattern in a grid of `size`; `(0, 0)` if it is larger.
    pub fn centered_origin(&self, size: GridSize) -> (usize, usize) {
        let bounds = self.bounds();
        (
            size.width.saturating_sub(bounds.width) / 2,
            size.height.saturating_sub(bounds.height) / 2,
        )
    }

    /// Sets the pattern's cells alive at `origin`. Leaves `grid` untouched if any cell
    /// would fall outside it.
    pub fn place(&self, grid: &mut Grid, origin: (usize, usize)) -> Result<(), LifeError> {
        let (col0, row0) = origin;
        let size = grid.size();
        if let Some(&(c, r)) = self
            .cells
            .iter()
            .find(|&&(c, r)| !size.contains(col0 + c, row0 + r))
        {
            return Err(LifeError::OutOfRange {
                col: col0 + c,
                row: row0 + r,
                width: size.width,
                height: size.height,
            });
        }

        for &(c, r) in self.cells {
            grid.set(col0 + c, row0 + r, Cell::Alive)?;
        }
        Ok(())
    }
}
