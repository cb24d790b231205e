use crate::config::Settings;
use crate::domain::{Cell, Engine, EngineError, Pattern};

/// Session drives the engine on behalf of the presentation loop.
/// It owns the only `Engine` and decides, frame by frame, whether to step.
pub struct Session {
    pub engine: Engine,
    pub title: String,
    pub is_animating: bool,
    /// A single step is queued for the next update frame
    pub step_pending: bool,
    /// State painted by a mouse drag, chosen by the click that started it
    pub brush: Cell,
    pub frame_count: u64,
    pub frames_per_update: u32,
    pub random_density: f64,
}

impl Session {
    /// Build a session around a fresh engine sized from the settings
    pub fn new(settings: &Settings) -> Result<Self, EngineError> {
        let engine = Engine::with_history_depth(
            settings.window.columns,
            settings.window.rows,
            settings.simulation.history_depth,
        )?;
        Ok(Self {
            engine,
            title: settings.window.title.clone(),
            is_animating: false,
            step_pending: false,
            brush: Cell::Alive,
            frame_count: 0,
            frames_per_update: settings.simulation.frames_per_update.max(1),
            random_density: settings.simulation.random_density,
        })
    }

    /// Toggle play/pause state
    pub fn toggle_animation(mut self) -> Self {
        self.is_animating = !self.is_animating;
        self
    }

    /// Queue one generation; animation stops once it is taken
    pub fn request_step(mut self) -> Self {
        self.step_pending = true;
        self
    }

    /// Go back one generation right away and pause
    pub fn rewind(mut self) -> Self {
        self.is_animating = false;
        self.step_pending = false;
        self.engine.rewind(1);
        self
    }

    /// Clear the board and its history, stopping everything
    pub fn clear(mut self) -> Self {
        self.engine.reset();
        self.is_animating = false;
        self.step_pending = false;
        self
    }

    /// Fill the board with random soup
    pub fn randomize(mut self) -> Self {
        self.randomize_with(&mut rand::rng());
        self
    }

    pub fn randomize_with<R: rand::Rng>(&mut self, rng: &mut R) {
        self.engine.randomize(rng, self.random_density);
        self.is_animating = false;
        self.step_pending = false;
    }

    /// Mouse press: flip the cell and remember its new state as the brush
    pub fn press(&mut self, x: usize, y: usize) -> Result<Cell, EngineError> {
        self.brush = self.engine.toggle_cell(x, y)?;
        Ok(self.brush)
    }

    /// Mouse drag: paint the brush state
    pub fn drag(&mut self, x: usize, y: usize) -> Result<(), EngineError> {
        self.engine.set_cell(x, y, self.brush)
    }

    /// Stamp a preset centered on a cell
    pub fn stamp(&mut self, pattern: &Pattern, x: usize, y: usize) -> Result<(), EngineError> {
        pattern.place_centered(&mut self.engine, x, y)
    }

    /// Advance the frame counter. Every `frames_per_update` frames the engine
    /// steps if animating or a step is pending. Returns whether it stepped.
    pub fn tick(&mut self) -> bool {
        self.frame_count += 1;
        if self.frame_count % u64::from(self.frames_per_update) != 0 {
            return false;
        }
        if !(self.is_animating || self.step_pending) {
            return false;
        }

        self.engine.update();
        if self.step_pending {
            self.is_animating = false;
            self.step_pending = false;
        }
        true
    }

    /// Window caption, flagged while animating
    pub fn caption(&self) -> String {
        if self.is_animating {
            format!("{} - Animating", self.title)
        } else {
            self.title.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> Session {
        let mut settings = Settings::default();
        settings.window.columns = 8;
        settings.window.rows = 8;
        settings.simulation.frames_per_update = 3;
        Session::new(&settings).unwrap()
    }

    fn run_frames(session: &mut Session, frames: usize) -> usize {
        (0..frames).filter(|_| session.tick()).count()
    }

    #[test]
    fn test_idle_session_never_steps() {
        let mut s = session();
        assert_eq!(run_frames(&mut s, 30), 0);
        assert_eq!(s.engine.generation(), 0);
    }

    #[test]
    fn test_animation_steps_once_per_interval() {
        let mut s = session().toggle_animation();
        assert_eq!(run_frames(&mut s, 9), 3);
        assert_eq!(s.engine.generation(), 3);
        assert_eq!(s.caption(), "Conway's Game of Life - Animating");
    }

    #[test]
    fn test_step_stops_animation() {
        let mut s = session().toggle_animation().request_step();
        assert_eq!(run_frames(&mut s, 6), 1);
        assert!(!s.is_animating);
        assert!(!s.step_pending);
        assert_eq!(s.caption(), "Conway's Game of Life");
    }

    #[test]
    fn test_press_sets_brush_for_drag() {
        let mut s = session();
        assert_eq!(s.press(2, 2), Ok(Cell::Alive));
        s.drag(3, 2).unwrap();
        assert_eq!(s.engine.cell(3, 2), Ok(Cell::Alive));

        assert_eq!(s.press(2, 2), Ok(Cell::Dead));
        s.drag(3, 2).unwrap();
        assert_eq!(s.engine.cell(3, 2), Ok(Cell::Dead));
        assert!(s.drag(8, 0).is_err());
    }

    #[test]
    fn test_rewind_pauses_and_restores() {
        let mut s = session();
        s.stamp(&presets::blinker(), 4, 4).unwrap();
        let before = s.engine.grid().clone();
        s = s.request_step();
        run_frames(&mut s, 3);
        assert_ne!(s.engine.grid(), &before);

        s = s.toggle_animation().rewind();
        assert!(!s.is_animating);
        assert_eq!(s.engine.grid(), &before);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut s = session();
        s.randomize_with(&mut StdRng::seed_from_u64(3));
        s = s.request_step();
        run_frames(&mut s, 3);
        s = s.toggle_animation().clear();
        assert_eq!(s.engine.population(), 0);
        assert_eq!(s.engine.history_depth(), 0);
        assert!(!s.is_animating && !s.step_pending);
    }
}
