use super::{Cell, Engine, EngineError};

/// Represents a pattern that can be stamped onto the board
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Stamp the pattern with its top-left corner at `(x, y)`.
    ///
    /// Fails without touching the board if any part would land off the grid.
    /// Like any manual edit, stamping records no history.
    pub fn place_on(&self, engine: &mut Engine, x: usize, y: usize) -> Result<(), EngineError> {
        let off_board = EngineError::OutOfRange {
            x,
            y,
            width: engine.width(),
            height: engine.height(),
        };
        let right = x.checked_add(self.width - 1).ok_or(off_board.clone())?;
        let bottom = y.checked_add(self.height - 1).ok_or(off_board)?;
        engine.cell(right, bottom)?;

        for (dx, dy) in &self.cells {
            engine.set_cell(x + dx, y + dy, Cell::Alive)?;
        }
        Ok(())
    }

    /// Stamp the pattern centered on `(cx, cy)`, pulled back inside the top and
    /// left edges
    pub fn place_centered(
        &self,
        engine: &mut Engine,
        cx: usize,
        cy: usize,
    ) -> Result<(), EngineError> {
        let x = cx.saturating_sub(self.width / 2);
        let y = cy.saturating_sub(self.height / 2);
        self.place_on(engine, x, y)
    }
}

/// Classic Game of Life patterns
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 1), (1, 1), (2, 1)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// R-pentomino - classic methuselah
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    /// All presets, in number-key order
    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider(), r_pentomino()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_bounds() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        assert_eq!(presets::blinker().height, 2);
    }

    #[test]
    fn test_place_out_of_bounds_is_atomic() {
        let mut engine = Engine::new(5, 5).unwrap();
        let result = presets::toad().place_on(&mut engine, 2, 0);
        assert!(matches!(result, Err(EngineError::OutOfRange { .. })));
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_place_far_off_board_does_not_overflow() {
        let mut engine = Engine::new(5, 5).unwrap();
        let glider = presets::glider();
        assert_eq!(
            glider.place_on(&mut engine, usize::MAX, 0),
            Err(EngineError::OutOfRange { x: usize::MAX, y: 0, width: 5, height: 5 })
        );
        assert!(glider.place_on(&mut engine, 0, usize::MAX - 1).is_err());
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_toad_period_two() {
        let mut engine = Engine::new(8, 8).unwrap();
        presets::toad().place_centered(&mut engine, 4, 4).unwrap();
        let start = engine.grid().clone();
        engine.update();
        assert_ne!(engine.grid(), &start);
        engine.update();
        assert_eq!(engine.grid(), &start);
    }

    #[test]
    fn test_glider_translates() {
        let mut engine = Engine::new(12, 12).unwrap();
        presets::glider().place_on(&mut engine, 1, 1).unwrap();
        for _ in 0..4 {
            engine.update();
        }
        let mut shifted = Engine::new(12, 12).unwrap();
        presets::glider().place_on(&mut shifted, 2, 2).unwrap();
        assert_eq!(engine.grid(), shifted.grid());
    }

    #[test]
    fn test_every_preset_fits_default_board() {
        for pattern in presets::all_patterns() {
            let mut engine = Engine::new(32, 22).unwrap();
            pattern.place_centered(&mut engine, 16, 11).unwrap();
            assert_eq!(engine.population(), pattern.cells.len(), "{}", pattern.name);
        }
    }
}
