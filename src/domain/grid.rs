use super::{Cell, EngineError};
use rand::Rng;
use rayon::prelude::*;

/// Grid is one generation of the board: a fixed-size, row-major array of cells.
/// Edges are hard walls; nothing outside the grid counts as a neighbor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of cells
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Convert 2D coordinates to 1D index, rejecting anything off the grid
    fn checked_index(&self, x: usize, y: usize) -> Result<usize, EngineError> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(EngineError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Get cell at position
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, EngineError> {
        self.checked_index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), EngineError> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Count live neighbors in the Moore neighborhood.
    /// Positions past the border are skipped, so corners see 3 cells and edges 5.
    fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let x_range = x.saturating_sub(1)..=(x + 1).min(self.width - 1);
        let y_range = y.saturating_sub(1)..=(y + 1).min(self.height - 1);

        y_range
            .flat_map(|ny| x_range.clone().map(move |nx| (nx, ny)))
            .filter(|&(nx, ny)| nx != x || ny != y)
            .filter(|&(nx, ny)| self.cells[ny * self.width + nx].is_alive())
            .count() as u8
    }

    /// Next state of a single cell, read from this generation only
    fn next_cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.width + x].evolve(self.count_live_neighbors(x, y))
    }

    /// Pure functional evolution - returns the next generation (serial)
    pub fn evolve(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| self.next_cell(x, y))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Parallel evolution using rayon, one task per row.
    /// Produces exactly the same grid as `evolve`.
    pub fn evolve_parallel(&self) -> Self {
        let mut cells = vec![Cell::Dead; self.cells.len()];
        cells
            .par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    *cell = self.next_cell(x, y);
                }
            });

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Fill with random soup, each cell alive with probability `density`
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_finite() { density.clamp(0.0, 1.0) } else { 0.0 };
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }
}
