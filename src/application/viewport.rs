/// Viewport maps window pixels to board cells with a fixed cell size.
/// There is no zoom or pan: cell (0, 0) is always at the window origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cell_size: f32,
    pub columns: usize,
    pub rows: usize,
}

impl Viewport {
    pub fn new(cell_size: u32, columns: usize, rows: usize) -> Self {
        Self {
            cell_size: cell_size as f32,
            columns,
            rows,
        }
    }

    /// Convert screen coordinates to a cell by integer division.
    /// Returns `None` for points off the board, so callers only ever pass
    /// in-bounds coordinates to the engine.
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        if screen_x < 0.0 || screen_y < 0.0 {
            return None;
        }
        let grid_x = (screen_x / self.cell_size) as usize;
        let grid_y = (screen_y / self.cell_size) as usize;
        (grid_x < self.columns && grid_y < self.rows).then_some((grid_x, grid_y))
    }

    /// Top-left pixel of a cell
    pub fn grid_to_screen(&self, grid_x: usize, grid_y: usize) -> (f32, f32) {
        (grid_x as f32 * self.cell_size, grid_y as f32 * self.cell_size)
    }

    /// Board size in pixels
    pub fn pixel_size(&self) -> (f32, f32) {
        (self.columns as f32 * self.cell_size, self.rows as f32 * self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_grid_integer_division() {
        let viewport = Viewport::new(32, 32, 22);
        assert_eq!(viewport.screen_to_grid(0.0, 0.0), Some((0, 0)));
        assert_eq!(viewport.screen_to_grid(31.9, 32.0), Some((0, 1)));
        assert_eq!(viewport.screen_to_grid(1023.0, 703.0), Some((31, 21)));
    }

    #[test]
    fn test_off_board_points_rejected() {
        let viewport = Viewport::new(32, 32, 22);
        assert_eq!(viewport.screen_to_grid(1024.0, 10.0), None);
        assert_eq!(viewport.screen_to_grid(10.0, 704.0), None);
        assert_eq!(viewport.screen_to_grid(-1.0, 10.0), None);
    }

    #[test]
    fn test_grid_to_screen() {
        let viewport = Viewport::new(10, 5, 5);
        assert_eq!(viewport.grid_to_screen(3, 2), (30.0, 20.0));
        assert_eq!(viewport.pixel_size(), (50.0, 50.0));
    }
}
