//! Configuration for the window and the simulation loop

pub mod settings;

pub use settings::{CliOverrides, Settings, SimulationConfig, WindowConfig};
