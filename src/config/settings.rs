//! Settings for the window and simulation, loadable from YAML

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::domain::DEFAULT_HISTORY_DEPTH;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowConfig,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Board width in cells
    pub columns: usize,
    /// Board height in cells
    pub rows: usize,
    /// Side of one cell in pixels
    pub cell_size: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Rendered frames per automaton step while animating
    pub frames_per_update: u32,
    /// Generations kept for rewind; `null` keeps everything
    pub history_depth: Option<usize>,
    /// Alive probability used by randomize
    pub random_density: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Conway's Game of Life".to_owned(),
            columns: 32,
            rows: 22,
            cell_size: 32,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frames_per_update: 15,
            history_depth: Some(DEFAULT_HISTORY_DEPTH),
            random_density: 0.3,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.window.columns == 0 || self.window.rows == 0 {
            anyhow::bail!(
                "Board must have at least one cell, got {}x{}",
                self.window.columns,
                self.window.rows
            );
        }

        if self.window.cell_size == 0 {
            anyhow::bail!("Cell size must be positive");
        }

        if self.simulation.frames_per_update == 0 {
            anyhow::bail!("frames_per_update must be positive");
        }

        if self.simulation.history_depth == Some(0) {
            anyhow::bail!("history_depth must be at least 1 (use null for unbounded)");
        }

        self.checked_window_size()?;

        if !(0.0..=1.0).contains(&self.simulation.random_density) {
            anyhow::bail!(
                "random_density must be within [0, 1], got {}",
                self.simulation.random_density
            );
        }

        Ok(())
    }

    /// Window size in pixels, failing if it does not fit a window dimension
    pub fn checked_window_size(&self) -> Result<(i32, i32)> {
        let side = |cells: usize, axis: &str| -> Result<i32> {
            u32::try_from(cells)
                .ok()
                .and_then(|cells| cells.checked_mul(self.window.cell_size))
                .and_then(|pixels| i32::try_from(pixels).ok())
                .with_context(|| {
                    format!(
                        "Window {} of {} cells at {} px per cell is too large",
                        axis, cells, self.window.cell_size
                    )
                })
        };
        Ok((side(self.window.columns, "width")?, side(self.window.rows, "height")?))
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(columns) = cli_overrides.columns {
            self.window.columns = columns;
        }
        if let Some(rows) = cli_overrides.rows {
            self.window.rows = rows;
        }
        if let Some(cell_size) = cli_overrides.cell_size {
            self.window.cell_size = cell_size;
        }
        if let Some(frames) = cli_overrides.frames_per_update {
            self.simulation.frames_per_update = frames;
        }
        if cli_overrides.unbounded_history {
            self.simulation.history_depth = None;
        } else if let Some(depth) = cli_overrides.history_depth {
            self.simulation.history_depth = Some(depth);
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub columns: Option<usize>,
    pub rows: Option<usize>,
    pub cell_size: Option<u32>,
    pub frames_per_update: Option<u32>,
    pub history_depth: Option<usize>,
    pub unbounded_history: bool,
}
