use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use macroquad::logging::info;
use macroquad::prelude::*;
use life_rewind::{
    Session, Settings, Viewport, presets,
    config::CliOverrides,
    input, rendering,
};

/// Conway's Game of Life with single-step rewind
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// YAML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board width in cells
    #[arg(long)]
    columns: Option<usize>,

    /// Board height in cells
    #[arg(long)]
    rows: Option<usize>,

    /// Cell size in pixels
    #[arg(long)]
    cell_size: Option<u32>,

    /// Rendered frames per generation while animating
    #[arg(long)]
    frames_per_update: Option<u32>,

    /// Generations kept for rewind
    #[arg(long, conflicts_with = "unbounded_history")]
    history_depth: Option<usize>,

    /// Keep every generation for rewind
    #[arg(long)]
    unbounded_history: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            columns: self.columns,
            rows: self.rows,
            cell_size: self.cell_size,
            frames_per_update: self.frames_per_update,
            history_depth: self.history_depth,
            unbounded_history: self.unbounded_history,
        }
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    settings.merge_with_cli(&cli.overrides());
    settings.validate().context("Invalid settings after command line overrides")?;
    Ok(settings)
}

fn window_conf(settings: &Settings) -> Result<Conf> {
    let (width, height) = settings.checked_window_size()?;
    Ok(Conf {
        window_title: settings.window.title.clone(),
        window_width: width,
        window_height: height,
        window_resizable: false,
        ..Default::default()
    })
}

async fn run(settings: Settings, mut session: Session) {
    let viewport = Viewport::new(
        settings.window.cell_size,
        settings.window.columns,
        settings.window.rows,
    );
    let patterns = presets::all_patterns();

    info!(
        "starting {}x{} board, history limit {:?}",
        session.engine.width(),
        session.engine.height(),
        session.engine.history_limit()
    );

    loop {
        let mouse_pos = mouse_position();

        // Process input
        input::handle_mouse_paint(&mut session, &viewport, mouse_pos);
        input::handle_pattern_keys(&mut session, &viewport, &patterns, mouse_pos);
        session = input::process_keyboard_input(session);

        // Step the automaton on its own slower cadence
        session.tick();

        // Render
        clear_background(WHITE);
        rendering::draw_grid(session.engine.grid(), &viewport);
        rendering::draw_status(&session);

        next_frame().await;
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(&cli)?;
    let session = Session::new(&settings).context("Failed to create the board")?;

    let conf = window_conf(&settings)?;
    macroquad::Window::from_config(conf, async move {
        run(settings, session).await;
    });

    info!("window closed");
    Ok(())
}
