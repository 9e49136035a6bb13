use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GridError;
use crate::grid::CellState::{Alive, Dead};


#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Alive
    }

    /// State of this cell in the next generation, given its live neighbor count.
    pub fn next(self, alive_neighbors: usize) -> Self {
        match (self, alive_neighbors) {
            (Alive, 2..=3) => Alive, // Survives
            (Dead, 3) => Alive,      // Becomes alive
            _ => Dead,               // Dies or remains dead
        }
    }
}

/// One generation: a fixed `rows x cols` torus of cells, stored row-major.
///
/// Dimensions are checked once at construction and never change afterwards.
/// [`Grid::advance`] builds a fresh grid instead of mutating this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// An all-dead grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = check_dimensions(rows, cols)?;
        Ok(Grid {
            rows,
            cols,
            cells: vec![Dead; len],
        })
    }

    /// A grid where every cell is independently alive with `alive_probability`.
    ///
    /// The random source is supplied by the caller, so a seeded generator
    /// always yields the same grid.
    pub fn initialize<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        alive_probability: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let len = check_dimensions(rows, cols)?;
        if !(0.0..=1.0).contains(&alive_probability) {
            return Err(GridError::InvalidProbability(alive_probability));
        }

        let cells = (0..len)
            .map(|_| {
                if rng.random_bool(alive_probability) {
                    Alive
                } else {
                    Dead
                }
            })
            .collect();
        Ok(Grid { rows, cols, cells })
    }

    /// [`Grid::initialize`] driven by a `ChaCha8Rng` seeded with `seed`.
    pub fn seeded(
        rows: usize,
        cols: usize,
        alive_probability: f64,
        seed: u64,
    ) -> Result<Self, GridError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::initialize(rows, cols, alive_probability, &mut rng)
    }

    /// An all-dead grid with the listed `(row, col)` cells alive.
    pub fn from_alive(
        rows: usize,
        cols: usize,
        alive: &[(usize, usize)],
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, cols)?;
        for &(row, col) in alive {
            let index = grid.index(row, col)?;
            grid.cells[index] = Alive;
        }
        Ok(grid)
    }

    /// Builds a grid from nested rows, which must all have the same length.
    pub fn from_rows(cells: Vec<Vec<CellState>>) -> Result<Self, GridError> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        let len = check_dimensions(rows, cols)?;

        let mut flat = Vec::with_capacity(len);
        for (index, row) in cells.into_iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::RaggedRow {
                    index,
                    expected: cols,
                    actual: row.len(),
                });
            }
            flat.extend(row);
        }
        Ok(Grid {
            rows,
            cols,
            cells: flat,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<CellState, GridError> {
        Ok(self.cells[self.index(row, col)?])
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Read-only rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Counts live cells among the 8 neighbors of `(row, col)`, wrapping
    /// around the edges.
    ///
    /// On grids narrower than 3 cells in some axis, wrapped neighbors can
    /// land on the same cell (or on `(row, col)` itself) and are counted
    /// once per adjacency.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> Result<usize, GridError> {
        self.index(row, col)?;
        Ok(self.alive_neighbors(row, col))
    }

    /// Computes the next generation into a new grid of the same dimensions.
    pub fn advance(&self) -> Grid {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let alive_neighbors = self.alive_neighbors(index / self.cols, index % self.cols);
                cell.next(alive_neighbors)
            })
            .collect();

        Grid {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Callers guarantee `(row, col)` is in range.
    fn alive_neighbors(&self, row: usize, col: usize) -> usize {
        let mut count = 0;

        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    // Skip the current cell
                    continue;
                }

                let neighbor_row = (row as isize + dr).rem_euclid(self.rows as isize) as usize;
                let neighbor_col = (col as isize + dc).rem_euclid(self.cols as isize) as usize;

                if self.cells[neighbor_row * self.cols + neighbor_col] == Alive {
                    count += 1;
                }
            }
        }

        count
    }
}

/// Number of cells in a `rows x cols` grid.
fn check_dimensions(rows: usize, cols: usize) -> Result<usize, GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::InvalidDimensions { rows, cols });
    }
    rows.checked_mul(cols).ok_or(GridError::InvalidDimensions { rows, cols })
}
