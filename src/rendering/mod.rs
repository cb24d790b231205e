use macroquad::prelude::*;

use crate::application::{Session, Viewport};
use crate::domain::Grid;

const BACKGROUND: Color = WHITE;
const GRID_LINE: Color = BLACK;
const ALIVE: Color = BLUE;
const STATUS_TEXT: Color = Color::new(0.85, 0.1, 0.1, 1.0);

/// Draw the board: white background, black grid lines, blue live cells
pub fn draw_grid(grid: &Grid, viewport: &Viewport) {
    let (width, height) = viewport.pixel_size();
    let cell_size = viewport.cell_size;
    let (columns, rows) = grid.dimensions();

    draw_rectangle(0.0, 0.0, width, height, BACKGROUND);

    for y in 0..rows {
        let screen_y = y as f32 * cell_size;
        draw_line(0.0, screen_y, width, screen_y, 1.0, GRID_LINE);
    }
    for x in 0..columns {
        let screen_x = x as f32 * cell_size;
        draw_line(screen_x, 0.0, screen_x, height, 1.0, GRID_LINE);
    }

    grid.iter_cells()
        .filter(|(_, _, cell)| cell.is_alive())
        .for_each(|(x, y, _)| {
            let (screen_x, screen_y) = viewport.grid_to_screen(x, y);
            draw_rectangle(screen_x, screen_y, cell_size, cell_size, ALIVE);
        });
}

/// Draw the caption and board counters in the top-left corner.
/// Stands in for the window title, which cannot change after startup.
pub fn draw_status(session: &Session) {
    let engine = &session.engine;
    let lines = [
        session.caption(),
        format!(
            "Generation {}  |  Population {}  |  Rewind {}",
            engine.generation(),
            engine.population(),
            engine.history_depth()
        ),
    ];

    lines.iter().enumerate().for_each(|(i, text)| {
        draw_text(text, 6.0, 18.0 + i as f32 * 18.0, 20.0, STATUS_TEXT);
    });
}
