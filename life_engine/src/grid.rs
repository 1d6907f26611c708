// grid.rs - Grid types for Conway's Game of Life

use crate::error::LifeError;

// Default grid configuration
pub const DEFAULT_GRID_SIZE: usize = 50;              // 50x50 playing area

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn toggled(self) -> Cell {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Dimensions of a grid, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub const fn square(side: usize) -> Self {
        Self::new(side, side)
    }

    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    pub const fn contains(&self, col: usize, row: usize) -> bool {
        col < self.width && row < self.height
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::square(DEFAULT_GRID_SIZE)
    }
}

/// The Game of Life transition for one cell, given its live neighbour count.
pub fn rule(cell: Cell, neighbours: u8) -> Cell {
    match (cell, neighbours) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,   // Survival
        (Cell::Dead, 3)                     => Cell::Alive,   // Birth
        _                                   => Cell::Dead,    // Death or stays dead
    }
}

/// One generation: a fixed-size, bounded (non-wrapping) matrix of cells.
///
/// Cells are addressed as `(col, row)` and stored row-major. Every accessor
/// rejects coordinates outside the grid with [`LifeError::OutOfRange`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid.
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size.area()],
        }
    }

    /// Grid with exactly the listed cells alive.
    pub fn from_alive<I>(size: GridSize, alive: I) -> Result<Self, LifeError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(size);
        for (col, row) in alive {
            grid.set(col, row, Cell::Alive)?;
        }
        Ok(grid)
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.width
    }

    pub fn height(&self) -> usize {
        self.size.height
    }

    fn index(&self, col: usize, row: usize) -> Result<usize, LifeError> {
        if self.size.contains(col, row) {
            Ok(row * self.size.width + col)
        } else {
            Err(LifeError::OutOfRange {
                col,
                row,
                width: self.size.width,
                height: self.size.height,
            })
        }
    }

    pub fn get(&self, col: usize, row: usize) -> Result<Cell, LifeError> {
        self.index(col, row).map(|i| self.cells[i])
    }

    pub fn is_alive(&self, col: usize, row: usize) -> Result<bool, LifeError> {
        self.get(col, row).map(Cell::is_alive)
    }

    pub fn set(&mut self, col: usize, row: usize, cell: Cell) -> Result<(), LifeError> {
        let i = self.index(col, row)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, col: usize, row: usize) -> Result<Cell, LifeError> {
        let i = self.index(col, row)?;
        self.cells[i] = self.cells[i].toggled();
        Ok(self.cells[i])
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of every live cell, row by row.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.size.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(i, _)| (i % width, i / width))
    }

    /// Live cells in the Moore neighbourhood of `(col, row)`.
    ///
    /// Positions past an edge count as dead, so edge and corner cells have
    /// fewer reachable neighbours than interior ones.
    pub fn live_neighbors(&self, col: usize, row: usize) -> Result<u8, LifeError> {
        self.index(col, row)?;
        Ok(self.count_neighbors(col, row))
    }

    // Caller guarantees (col, row) is in bounds.
    fn count_neighbors(&self, col: usize, row: usize) -> u8 {
        let cols = col.saturating_sub(1)..=(col + 1).min(self.size.width - 1);
        let rows = row.saturating_sub(1)..=(row + 1).min(self.size.height - 1);

        let mut count = 0;
        for nr in rows {
            for nc in cols.clone() {
                if (nc, nr) != (col, row) && self.cells[nr * self.size.width + nc].is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Computes the following generation. Reads only `self`; the result is a new grid.
    pub fn next_generation(&self) -> Grid {
        let mut next = Grid::new(self.size);
        for row in 0..self.size.height {
            for col in 0..self.size.width {
                let i = row * self.size.width + col;
                next.cells[i] = rule(self.cells[i], self.count_neighbors(col, row));
            }
        }
        next
    }
}
