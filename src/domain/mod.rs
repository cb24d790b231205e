mod cell;
mod engine;
mod error;
mod grid;
mod history;
mod patterns;

pub use cell::Cell;
pub use engine::{Engine, PARALLEL_THRESHOLD};
pub use error::EngineError;
pub use grid::Grid;
pub use history::{History, DEFAULT_HISTORY_DEPTH};
pub use patterns::{Pattern, presets};
