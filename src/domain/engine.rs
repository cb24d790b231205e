//! The automaton engine: the live grid plus its rewind history.
//!
//! The engine knows nothing about pixels, windows or input devices. A
//! presentation loop calls the accessors to edit and draw the board,
//! `update` to advance it, and `rewind`/`reset` to go back.

use rand::Rng;

use super::{Cell, EngineError, Grid, History};

/// Grids with at least this many cells are evolved with rayon.
pub const PARALLEL_THRESHOLD: usize = 256 * 256;

/// Game of Life board with bounded single-step rewind.
#[derive(Clone, Debug)]
pub struct Engine {
    grid: Grid,
    history: History,
    generation: u64,
}

impl Engine {
    /// New all-dead engine with the default history depth
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            history: History::default(),
            generation: 0,
        })
    }

    /// New all-dead engine keeping at most `depth` past generations
    /// (`None` keeps all of them)
    pub fn with_history_depth(
        width: usize,
        height: usize,
        depth: Option<usize>,
    ) -> Result<Self, EngineError> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            history: History::new(depth)?,
            generation: 0,
        })
    }

    pub const fn width(&self) -> usize {
        self.grid.dimensions().0
    }

    pub const fn height(&self) -> usize {
        self.grid.dimensions().1
    }

    /// Read-only view of the current generation
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<Cell, EngineError> {
        self.grid.get(x, y)
    }

    /// Manual edit of a single cell. Does not record history.
    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), EngineError> {
        self.grid.set(x, y, cell)
    }

    /// Flip a cell and return its new state
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<Cell, EngineError> {
        let cell = self.grid.get(x, y)?.toggle();
        self.grid.set(x, y, cell)?;
        Ok(cell)
    }

    /// Advance one generation, saving the current one for rewind
    pub fn update(&mut self) {
        let next = if self.grid.area() >= PARALLEL_THRESHOLD {
            self.grid.evolve_parallel()
        } else {
            self.grid.evolve()
        };
        let previous = std::mem::replace(&mut self.grid, next);
        self.history.push(previous);
        self.generation += 1;
    }

    /// Restore the grid to `n` generations back, or to the earliest one kept.
    /// Returns how many generations were undone; with no history this is a
    /// no-op returning 0.
    pub fn rewind(&mut self, n: usize) -> usize {
        match self.history.pop(n) {
            Some((grid, count)) => {
                self.grid = grid;
                self.generation = self.generation.saturating_sub(count as u64);
                count
            }
            None => 0,
        }
    }

    /// Kill every cell and forget all history
    pub fn reset(&mut self) {
        self.grid.clear();
        self.history.clear();
        self.generation = 0;
    }

    /// Random soup; counts as a manual edit, so no history is recorded
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        self.grid.randomize(rng, density);
    }

    /// Generations stepped since the last reset, net of rewinds
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Number of generations available to rewind
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    pub const fn history_limit(&self) -> Option<usize> {
        self.history.max_depth()
    }
}
